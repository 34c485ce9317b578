//! Garden of Time core crate.
//!
//! A browser game teaching children to read an analog clock. The arithmetic
//! lives in [`clock`] (hand angles, circular matching), [`challenge`]
//! (random targets per difficulty tier), and [`display`] (spoken-form
//! phrases); [`session`] carries the mutable practice state and the
//! learning progression, [`api`] holds the backend boundary contracts, and
//! [`game`] exposes the JS entry points. Everything except the fetch glue
//! in `remote` compiles and tests natively.

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod api;
pub mod challenge;
pub mod clock;
pub mod display;
pub mod game;
#[cfg(target_arch = "wasm32")]
pub mod remote;
pub mod session;

pub use challenge::{Challenge, Difficulty};
pub use clock::{ClockTime, HandAngles};
pub use session::ClockSession;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Daily routine dataset (24-hour mode)
// Hours are 24-hour wall-clock values; this is the only place the crate
// speaks 0-23 — the face itself stays 12-hour throughout.
// -----------------------------------------------------------------------------

pub const DAILY_EVENTS: &[(u8, &str, &str)] = &[
    (6, "🌅 Wake Up", "Morning routine starts"),
    (7, "🍳 Breakfast", "Time for breakfast"),
    (8, "🚌 School", "School or learning time"),
    (9, "📚 Learning", "Focused learning period"),
    (10, "🎯 Activity", "Activity or exercise time"),
    (11, "🧃 Snack", "Morning snack break"),
    (12, "🍽️ Lunch", "Lunch time"),
    (13, "😴 Quiet", "Quiet time or rest"),
    (14, "🎨 Creative", "Creative activities"),
    (15, "🥪 Snack", "Afternoon snack"),
    (16, "🏃 Play", "Outdoor or active play"),
    (17, "🧹 Cleanup", "Tidy up time"),
    (18, "👨‍👩‍👧‍👦 Family", "Family time"),
    (19, "🍽️ Dinner", "Dinner time"),
    (20, "🛁 Bath", "Bath time"),
    (21, "📖 Story", "Story time"),
    (22, "🌙 Bedtime", "Bedtime routine"),
];

/// Routine entry for a 24-hour time, if one is scheduled for that hour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEvent {
    pub hour: u8,
    pub event: &'static str,
    pub routine: &'static str,
    /// Within 15 minutes past the event's hour.
    pub is_near: bool,
}

/// Looks up the daily event for a 24-hour time. Overnight hours have no
/// scheduled routine and return `None`.
pub fn daily_event(hour24: i32, minute: i32) -> Option<DailyEvent> {
    let hour = hour24.rem_euclid(24) as u8;
    DAILY_EVENTS
        .iter()
        .find(|&&(h, _, _)| h == hour)
        .map(|&(hour, event, routine)| DailyEvent {
            hour,
            event,
            routine,
            is_near: minute.rem_euclid(60) <= 15,
        })
}
