//! Random target-time generation, bucketed by difficulty tier.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::display::format_time;

/// Default matching tolerance (minutes) for general answer checking.
pub const DEFAULT_TOLERANCE_MINUTES: i32 = 5;

/// Tolerance used by stricter validation callers (exact-minute practice).
pub const STRICT_TOLERANCE_MINUTES: i32 = 2;

/// Minute values drawn at the quarter-hour tier.
const QUARTER_MINUTES: [u8; 4] = [0, 15, 30, 45];

// --- Difficulty --------------------------------------------------------------

/// Which minute values a generated challenge may take.
///
/// A closed set: query strings that aren't a recognized tier fall back to
/// [`Difficulty::Any`] explicitly instead of silently half-matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// O'clock times only (minute fixed at 0).
    Easy,
    /// Quarter marks: 0, 15, 30, 45.
    Medium,
    /// Any 5-minute step.
    Hard,
    /// Any minute value 0..=59.
    #[default]
    Any,
}

impl Difficulty {
    /// Parses a difficulty query string; anything unrecognized is `Any`.
    pub fn parse(s: &str) -> Self {
        match s {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Any,
        }
    }

    /// Query-string form used by the generate-time endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Any => "any",
        }
    }

    /// Matching tolerance schedule, loosest tier first. The broad-minute
    /// tiers get the default tolerance; `Any` is judged strictly since its
    /// targets can land on any minute.
    pub fn tolerance_minutes(self) -> i32 {
        match self {
            Self::Easy => 15,
            Self::Medium => 10,
            Self::Hard => DEFAULT_TOLERANCE_MINUTES,
            Self::Any => STRICT_TOLERANCE_MINUTES,
        }
    }
}

// --- Challenge ---------------------------------------------------------------

/// One target time for a round, with its prompt phrase precomputed.
/// Created fresh per round and discarded when the round ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub hour: u8,
    pub minute: u8,
    pub display_time: String,
}

impl Challenge {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour,
            minute,
            display_time: format_time(hour as i32, minute as i32),
        }
    }

    pub fn time(&self) -> ClockTime {
        ClockTime::new(self.hour as i32, self.minute as i32)
    }
}

/// Draws a challenge from the given source. Hour is uniform over 0..=11;
/// the minute pool follows the tier. Tests pass a seeded `SmallRng`.
pub fn generate_with<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Challenge {
    let hour = rng.gen_range(0..12u8);
    let minute = match difficulty {
        Difficulty::Easy => 0,
        // choose() is only None on an empty slice
        Difficulty::Medium => *QUARTER_MINUTES.choose(rng).unwrap_or(&0),
        Difficulty::Hard => rng.gen_range(0..12u8) * 5,
        Difficulty::Any => rng.gen_range(0..60u8),
    };
    Challenge::new(hour, minute)
}

/// Draws a challenge from the thread-local generator.
pub fn generate(difficulty: Difficulty) -> Challenge {
    generate_with(&mut rand::thread_rng(), difficulty)
}

/// Independent draws for the batch endpoint.
pub fn generate_batch_with<R: Rng>(rng: &mut R, count: usize, difficulty: Difficulty) -> Vec<Challenge> {
    (0..count).map(|_| generate_with(rng, difficulty)).collect()
}

pub fn generate_batch(count: usize, difficulty: Difficulty) -> Vec<Challenge> {
    generate_batch_with(&mut rand::thread_rng(), count, difficulty)
}
