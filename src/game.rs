//! JS-facing session driver.
//!
//! The UI keeps no game state of its own: one [`ClockSession`] lives in a
//! thread-local cell and the exported functions below mutate it. Exports
//! exchange JSON strings so the frontend can consume plain objects without
//! a generated binding layer.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::challenge::Difficulty;
use crate::session::{keyboard_instructions, ClockSession, LearningMode};

thread_local! {
    static SESSION: RefCell<Option<ClockSession>> = const { RefCell::new(None) };
}

/// Starts a fresh practice session and returns the first challenge prompt.
/// `mode` is "sequencing" or anything else for standard tiers; unrecognized
/// difficulty strings take the default tier.
#[wasm_bindgen]
pub fn start_practice(difficulty: &str, mode: &str) -> Result<String, JsValue> {
    let mode = if mode == "sequencing" { LearningMode::Sequencing } else { LearningMode::Standard };
    let session = ClockSession::new(Difficulty::parse(difficulty), mode);
    let prompt = serde_json::to_string(&session.target).map_err(to_js)?;
    SESSION.with(|cell| cell.replace(Some(session)));
    Ok(prompt)
}

/// Applies a drag update from the rendered hand angles and reports the time
/// the hands now read, plus whether they overlap (snack time!).
#[wasm_bindgen]
pub fn drag_hands(hour_angle: f64, minute_angle: f64) -> Result<String, JsValue> {
    with_session(|session| {
        let snack = session.set_hands_from_angles(hour_angle, minute_angle);
        let update = serde_json::json!({
            "hour": session.current.hour,
            "minute": session.current.minute,
            "displayTime": session.current.to_string(),
            "snackTime": snack,
        });
        serde_json::to_string(&update).map_err(to_js)
    })
}

/// Judges the current hand position against the target and returns the
/// feedback object (success flag, message, hints).
#[wasm_bindgen]
pub fn check_answer() -> Result<String, JsValue> {
    with_session(|session| serde_json::to_string(&session.check()).map_err(to_js))
}

/// Abandons the current round and draws the next target adaptively.
#[wasm_bindgen]
pub fn next_challenge() -> Result<String, JsValue> {
    with_session(|session| {
        session.give_up();
        let target = session.next_challenge().clone();
        serde_json::to_string(&target).map_err(to_js)
    })
}

/// Snapshot for the progress sidebar: reward tallies, metrics, and the
/// keyboard help lines for the current mode.
#[wasm_bindgen]
pub fn session_summary() -> Result<String, JsValue> {
    with_session(|session| {
        let summary = serde_json::json!({
            "seedsCollected": session.seeds_collected,
            "snackTimesUnlocked": session.snack_times_unlocked,
            "sequencingLevel": session.sequencing_level,
            "lastCorrectTime": session.last_correct_time,
            "metrics": session.metrics(),
            "keyboardInstructions": keyboard_instructions(session.mode, session.scaffolding_level),
        });
        serde_json::to_string(&summary).map_err(to_js)
    })
}

fn with_session<T>(f: impl FnOnce(&mut ClockSession) -> Result<T, JsValue>) -> Result<T, JsValue> {
    SESSION.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let session = borrow
            .as_mut()
            .ok_or_else(|| JsValue::from_str("no active session; call start_practice first"))?;
        f(session)
    })
}

fn to_js(err: serde_json::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
