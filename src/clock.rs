//! Clock-face arithmetic: hand angles, angle-to-time conversion, and the
//! circular match test used to judge answers.
//!
//! Everything here is a total function over numeric inputs. Out-of-range
//! hours and minutes are normalized with modulo arithmetic rather than
//! rejected, so no operation in this module can fail.

use serde::{Deserialize, Serialize};

// --- Face constants ----------------------------------------------------------

/// Minutes in one revolution of a 12-hour face.
pub const FACE_MINUTES: i32 = 720;

/// Degrees the minute hand sweeps per minute (360 / 60).
pub const DEG_PER_MINUTE: f64 = 6.0;

/// Degrees the hour hand sweeps per hour (360 / 12).
pub const DEG_PER_HOUR: f64 = 30.0;

/// Degrees the hour hand creeps per elapsed minute (30 / 60).
pub const HOUR_CREEP_PER_MINUTE: f64 = 0.5;

/// Hands closer than this (degrees, circular) count as overlapping.
const SNACK_THRESHOLD_DEG: f64 = 3.0;

// --- ClockTime ---------------------------------------------------------------

/// A position on a 12-hour analog face.
///
/// Canonical representation is zero-based: `hour` in 0..=11 (0 renders as
/// 12), `minute` in 0..=59. Constructors normalize anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    /// Builds a `ClockTime`, wrapping any integer hour/minute onto the face.
    /// Minute overflow carries into the hour (75 minutes past 3 is 4:15).
    pub fn new(hour: i32, minute: i32) -> Self {
        let carry = minute.div_euclid(60);
        Self {
            hour: (hour + carry).rem_euclid(12) as u8,
            minute: minute.rem_euclid(60) as u8,
        }
    }

    /// Minutes since 12:00 on the face, in 0..720.
    pub fn face_minutes(self) -> i32 {
        (self.hour % 12) as i32 * 60 + self.minute as i32
    }

    /// Reads a time back from rendered hand angles. This is the discrete
    /// inverse of [`HandAngles::for_time`]: the minute rounds to the nearest
    /// whole minute and the hour snaps to the nearest hour slot after the
    /// minute hand's creep contribution is subtracted out.
    pub fn from_angles(hour_angle: f64, minute_angle: f64) -> Self {
        Self {
            hour: hour_from_angles(hour_angle, minute_angle),
            minute: minute_from_angle(minute_angle),
        }
    }

    /// Hand angles for this time.
    pub fn angles(self) -> HandAngles {
        HandAngles::for_time(self)
    }
}

// --- Hand angles -------------------------------------------------------------

/// Rendered positions of the two hands, degrees clockwise from 12, in [0, 360).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandAngles {
    pub hour_angle: f64,
    pub minute_angle: f64,
}

impl HandAngles {
    pub fn for_time(time: ClockTime) -> Self {
        hand_angles(time.hour as f64, time.minute as f64)
    }
}

/// Hand angles for an arbitrary (possibly fractional) hour and minute.
///
/// The hour hand carries the 0.5°/minute creep term, so at 3:30 it sits
/// halfway between 3 and 4 rather than pointing straight at 3. Total over
/// all real inputs; results are normalized into [0, 360).
pub fn hand_angles(hour: f64, minute: f64) -> HandAngles {
    HandAngles {
        hour_angle: (hour * DEG_PER_HOUR + minute * HOUR_CREEP_PER_MINUTE).rem_euclid(360.0),
        minute_angle: (minute * DEG_PER_MINUTE).rem_euclid(360.0),
    }
}

/// Nearest whole minute for a minute-hand angle. Negative angles wrap.
pub fn minute_from_angle(angle: f64) -> u8 {
    let normalized = angle.rem_euclid(360.0);
    ((normalized / DEG_PER_MINUTE).round() as i32).rem_euclid(60) as u8
}

/// Hour slot for an hour-hand angle, given where the minute hand sits.
///
/// The minute hand's position tells us how far the hour hand has crept past
/// its slot; subtracting that before dividing by 30 makes this the inverse
/// of [`hand_angles`] for on-grid times.
pub fn hour_from_angles(hour_angle: f64, minute_angle: f64) -> u8 {
    let normalized = hour_angle.rem_euclid(360.0);
    let minute = minute_from_angle(minute_angle) as f64;
    let hour = ((normalized - minute * HOUR_CREEP_PER_MINUTE) / DEG_PER_HOUR).round() as i32;
    hour.rem_euclid(12) as u8
}

// --- Match validation --------------------------------------------------------

/// Shorter way around the face between two times, in minutes (0..=360).
///
/// 11:58 and 12:02 are 4 minutes apart, not 716: the plain difference is
/// folded with `min(diff, 720 - diff)` so answers near the 12 o'clock
/// boundary are judged by true hand distance.
pub fn circular_distance(a: ClockTime, b: ClockTime) -> i32 {
    let diff = (a.face_minutes() - b.face_minutes()).abs();
    diff.min(FACE_MINUTES - diff)
}

/// Whether `submitted` lands within `tolerance_minutes` of `target`,
/// measured the short way around the face. Symmetric in its time arguments.
pub fn is_match(submitted: ClockTime, target: ClockTime, tolerance_minutes: i32) -> bool {
    circular_distance(submitted, target) <= tolerance_minutes
}

// --- Snack time --------------------------------------------------------------

/// True when the hour and minute hands visually overlap (within ~3°, the
/// short way around). Celebration trigger only, never used for scoring.
pub fn is_snack_time(hour: i32, minute: i32) -> bool {
    let time = ClockTime::new(hour, minute);
    let HandAngles { hour_angle, minute_angle } = time.angles();
    let diff = (hour_angle - minute_angle).abs();
    diff.min(360.0 - diff) < SNACK_THRESHOLD_DEG
}
