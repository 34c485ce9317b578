//! Practice-session state and the learning progression built on top of the
//! clock arithmetic.
//!
//! The session record replaces what the original UI kept as scattered
//! component state: the current target, the live hand positions, attempt
//! counts, and the reward tallies. The arithmetic core stays stateless;
//! everything mutable lives here and is passed through the calling layer.
//!
//! Two progression systems sit alongside plain difficulty tiers:
//! - sequencing levels (hours-only through exact minutes), one file per
//!   level under `src/session/`;
//! - scaffolding levels controlling which hands are active and how much
//!   guidance the UI shows.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::challenge::{self, Challenge, Difficulty};
use crate::clock::{self, ClockTime};

mod level1;
mod level2;
mod level3;
mod level4;

pub use level1::LEVEL1;
pub use level2::LEVEL2;
pub use level3::LEVEL3;
pub use level4::LEVEL4;

/// Ordered sequencing levels, easiest first.
pub static SEQUENCING_LEVELS: [&SequencingLevel; 4] = [&LEVEL1, &LEVEL2, &LEVEL3, &LEVEL4];

/// Sequencing level for a 1-based level number, clamped to the valid range.
pub fn sequencing_level(level: u8) -> &'static SequencingLevel {
    let idx = (level.max(1) as usize - 1).min(SEQUENCING_LEVELS.len() - 1);
    SEQUENCING_LEVELS[idx]
}

// --- Sequencing levels -------------------------------------------------------

/// One step of the sequencing progression: which minute values its targets
/// draw from and how strictly answers are judged.
pub struct SequencingLevel {
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
    /// Allowed minute error, in minutes.
    pub tolerance_minutes: i32,
    /// Allowed hour-slot error (circular on the 12-hour face).
    pub hour_tolerance: i32,
    /// Minute values targets are drawn from.
    pub minute_pool: &'static [u8],
    pub hint: &'static str,
}

impl SequencingLevel {
    /// Draws a target from this level's minute pool.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Challenge {
        let hour = rng.gen_range(0..12u8);
        let minute = self.minute_pool[rng.gen_range(0..self.minute_pool.len())];
        Challenge::new(hour, minute)
    }

    /// Per-hand validation used by sequencing practice. Unlike the plain
    /// circular match, the hour and minute hands are judged separately so
    /// feedback can say which hand is off.
    pub fn validate(&self, user: ClockTime, target: ClockTime) -> bool {
        hour_slot_distance(user, target) <= self.hour_tolerance
            && minute_distance(user, target) <= self.tolerance_minutes
    }
}

/// Circular distance between hour slots on the 12-hour face.
fn hour_slot_distance(a: ClockTime, b: ClockTime) -> i32 {
    let diff = (a.hour as i32 - b.hour as i32).abs();
    diff.min(12 - diff)
}

/// Circular distance between minute-hand positions.
fn minute_distance(a: ClockTime, b: ClockTime) -> i32 {
    let diff = (a.minute as i32 - b.minute as i32).abs();
    diff.min(60 - diff)
}

// --- Scaffolding levels ------------------------------------------------------

/// Gradual complexity introduction: which hands the learner controls and
/// how much visual guidance stays on.
pub struct ScaffoldingLevel {
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub hour_hand: bool,
    pub minute_hand: bool,
    pub visual_aids: bool,
    pub hint: &'static str,
}

pub static SCAFFOLDING_LEVELS: [ScaffoldingLevel; 3] = [
    ScaffoldingLevel {
        level: 1,
        name: "Hour Hand Only",
        description: "Focus on hour hand without minute hand",
        hour_hand: true,
        minute_hand: false,
        visual_aids: true,
        hint: "Focus on where the carrot (hour hand) points",
    },
    ScaffoldingLevel {
        level: 2,
        name: "Both Hands",
        description: "Introduce minute hand with hour hand",
        hour_hand: true,
        minute_hand: true,
        visual_aids: true,
        hint: "Now use both carrot (hour) and rabbit (minute) hands",
    },
    ScaffoldingLevel {
        level: 3,
        name: "Independent Practice",
        description: "Full clock with minimal guidance",
        hour_hand: true,
        minute_hand: true,
        visual_aids: false,
        hint: "You can do it! Use both hands to set the time",
    },
];

// --- Attempt history & progress metrics --------------------------------------

/// Outcome of one completed round.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Attempt {
    pub success: bool,
    /// How many checks the round took.
    pub attempts: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

/// Summary of recent performance shown in the progress sidebar.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressMetrics {
    /// Whole percent over the last 20 rounds.
    pub success_rate: u32,
    /// Mean checks per round over the last 20 rounds, one decimal.
    pub average_attempts: f64,
    pub improvement_trend: Trend,
    pub current_streak: u32,
    pub best_streak: u32,
}

/// Fraction of successes among the most recent `window` rounds.
pub fn recent_success_rate(history: &[Attempt], window: usize) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let recent = &history[history.len().saturating_sub(window)..];
    recent.iter().filter(|a| a.success).count() as f64 / recent.len() as f64
}

/// Computes the sidebar metrics from the full attempt history.
pub fn progress_metrics(history: &[Attempt]) -> ProgressMetrics {
    if history.is_empty() {
        return ProgressMetrics {
            success_rate: 0,
            average_attempts: 0.0,
            improvement_trend: Trend::Stable,
            current_streak: 0,
            best_streak: 0,
        };
    }

    let recent = &history[history.len().saturating_sub(20)..];
    let success_rate = recent_success_rate(recent, recent.len());
    let average_attempts =
        recent.iter().map(|a| a.attempts as f64).sum::<f64>() / recent.len() as f64;

    // Trend: compare success rates of the two halves of the recent window.
    let mid = recent.len() / 2;
    let (first, second) = recent.split_at(mid);
    let rate_of = |slice: &[Attempt]| {
        if slice.is_empty() {
            0.0
        } else {
            slice.iter().filter(|a| a.success).count() as f64 / slice.len() as f64
        }
    };
    let improvement_trend = if rate_of(second) > rate_of(first) + 0.1 {
        Trend::Improving
    } else if rate_of(second) < rate_of(first) - 0.1 {
        Trend::Declining
    } else {
        Trend::Stable
    };

    let mut best_streak = 0u32;
    let mut streak = 0u32;
    for attempt in history {
        if attempt.success {
            streak += 1;
            best_streak = best_streak.max(streak);
        } else {
            streak = 0;
        }
    }

    ProgressMetrics {
        success_rate: (success_rate * 100.0).round() as u32,
        average_attempts: (average_attempts * 10.0).round() / 10.0,
        improvement_trend,
        current_streak: streak,
        best_streak,
    }
}

// --- Adaptive challenge selection --------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningMode {
    /// Plain difficulty tiers adjusted by success rate.
    Standard,
    /// The four-step sequencing progression.
    Sequencing,
}

/// Picks the next target from recent performance.
///
/// Sequencing mode steps the level up past 80% recent success and back down
/// below 50%; standard mode maps success rate onto the difficulty tiers,
/// except that an empty history keeps the session's chosen `difficulty`
/// (a fresh session must not downgrade before the first round is judged).
/// Returns the (possibly unchanged) sequencing level alongside the target.
pub fn adaptive_challenge_with<R: Rng>(
    rng: &mut R,
    history: &[Attempt],
    mode: LearningMode,
    current_level: u8,
    difficulty: Difficulty,
) -> (u8, Challenge) {
    let rate = recent_success_rate(history, 10);
    match mode {
        LearningMode::Sequencing => {
            let level = if rate > 0.8 && current_level < 4 {
                current_level + 1
            } else if rate < 0.5 && current_level > 1 {
                current_level - 1
            } else {
                current_level
            };
            (level, sequencing_level(level).generate_with(rng))
        }
        LearningMode::Standard => {
            let tier = if history.is_empty() {
                difficulty
            } else if rate > 0.9 {
                Difficulty::Hard
            } else if rate < 0.4 {
                Difficulty::Easy
            } else {
                Difficulty::Medium
            };
            (current_level, challenge::generate_with(rng, tier))
        }
    }
}

// --- Feedback ----------------------------------------------------------------

/// What the UI shows after a check: pass/fail plus hand-specific hints.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub success: bool,
    pub message: String,
    pub hints: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Judges an answer and builds hand-specific guidance.
///
/// Standard mode passes on the plain circular match at `tolerance_minutes`;
/// sequencing mode uses the level's per-hand validator, so level 1 accepts
/// an adjacent hour slot the way its looser hour tolerance promises. The
/// failure messages look at the hour and minute hands separately so the
/// learner hears which hand to fix.
pub fn validate_with_feedback(
    user: ClockTime,
    target: ClockTime,
    mode: LearningMode,
    current_level: u8,
    tolerance_minutes: i32,
) -> Feedback {
    let success = match mode {
        LearningMode::Sequencing => sequencing_level(current_level).validate(user, target),
        LearningMode::Standard => clock::is_match(user, target, tolerance_minutes),
    };
    if success {
        let next_steps = if mode == LearningMode::Sequencing && current_level < 4 {
            vec!["Ready for the next challenge level!".to_owned()]
        } else {
            vec!["Keep practicing to improve your skills!".to_owned()]
        };
        return Feedback {
            success: true,
            message: "🌟 Perfect! You got it right!".to_owned(),
            hints: Vec::new(),
            next_steps,
        };
    }

    let hour_off = hour_slot_distance(user, target);
    let minute_off = minute_distance(user, target);
    let mut hints = Vec::new();
    let message = if mode == LearningMode::Sequencing {
        let level = sequencing_level(current_level);
        if hour_off > 1 {
            hints.push(level.hint.to_owned());
            "🥕 Check your hour hand - the carrot needs to point to the right hour".to_owned()
        } else if current_level > 1 && minute_off > level.tolerance_minutes {
            hints.push("Remember: each number represents 5 minutes for the rabbit hand".to_owned());
            "🐰 Check your minute hand - the rabbit needs adjustment".to_owned()
        } else {
            "🌱 Very close! Try a small adjustment".to_owned()
        }
    } else if hour_off > 1 {
        "🥕 Check your hour hand position".to_owned()
    } else if minute_off > 5 {
        "🐰 Check your minute hand position".to_owned()
    } else {
        "🌱 Almost there! Make a small adjustment".to_owned()
    };

    Feedback { success: false, message, hints, next_steps: Vec::new() }
}

// --- Session record ----------------------------------------------------------

/// All mutable state of one practice sitting.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockSession {
    pub difficulty: Difficulty,
    pub mode: LearningMode,
    /// 1-based sequencing level, meaningful in sequencing mode.
    pub sequencing_level: u8,
    /// 1-based scaffolding level.
    pub scaffolding_level: u8,
    pub target: Challenge,
    pub current: ClockTime,
    /// Checks taken in the current round.
    pub attempts: u32,
    pub seeds_collected: u32,
    pub snack_times_unlocked: u32,
    /// Latched so a round can unlock at most one snack time.
    #[serde(skip)]
    snack_seen_this_round: bool,
    /// Latched once the round is solved so repeated checks cannot collect
    /// a second seed or push a second history entry.
    #[serde(skip)]
    round_complete: bool,
    pub history: Vec<Attempt>,
    /// Prompt of the last correctly answered target.
    pub last_correct_time: Option<String>,
}

impl ClockSession {
    pub fn new(difficulty: Difficulty, mode: LearningMode) -> Self {
        Self::with_rng(&mut rand::thread_rng(), difficulty, mode)
    }

    pub fn with_rng<R: Rng>(rng: &mut R, difficulty: Difficulty, mode: LearningMode) -> Self {
        let target = match mode {
            LearningMode::Sequencing => sequencing_level(1).generate_with(rng),
            LearningMode::Standard => challenge::generate_with(rng, difficulty),
        };
        Self {
            difficulty,
            mode,
            sequencing_level: 1,
            scaffolding_level: 2,
            target,
            current: ClockTime::new(0, 0),
            attempts: 0,
            seeds_collected: 0,
            snack_times_unlocked: 0,
            snack_seen_this_round: false,
            round_complete: false,
            history: Vec::new(),
            last_correct_time: None,
        }
    }

    /// Tolerance the current round is judged at.
    pub fn tolerance_minutes(&self) -> i32 {
        match self.mode {
            LearningMode::Sequencing => sequencing_level(self.sequencing_level).tolerance_minutes,
            LearningMode::Standard => self.difficulty.tolerance_minutes(),
        }
    }

    /// Applies a drag update from rendered hand angles. Returns true when
    /// the hands now overlap (snack time); the unlock counter bumps at most
    /// once per round.
    pub fn set_hands_from_angles(&mut self, hour_angle: f64, minute_angle: f64) -> bool {
        self.current = ClockTime::from_angles(hour_angle, minute_angle);
        let snack = clock::is_snack_time(self.current.hour as i32, self.current.minute as i32);
        if snack && !self.snack_seen_this_round {
            self.snack_seen_this_round = true;
            self.snack_times_unlocked += 1;
        }
        snack
    }

    /// Judges the current hand position against the target, recording the
    /// outcome. A correct answer closes the round, collects a seed, and
    /// stores the prompt for progress saving; the next round starts when
    /// [`Self::next_challenge_with`] is called. Checking an already-solved
    /// round re-reports without counting an attempt or crediting anything.
    pub fn check(&mut self) -> Feedback {
        if self.round_complete {
            return validate_with_feedback(
                self.current,
                self.target.time(),
                self.mode,
                self.sequencing_level,
                self.tolerance_minutes(),
            );
        }
        self.attempts += 1;
        let feedback = validate_with_feedback(
            self.current,
            self.target.time(),
            self.mode,
            self.sequencing_level,
            self.tolerance_minutes(),
        );
        if feedback.success {
            self.round_complete = true;
            self.history.push(Attempt { success: true, attempts: self.attempts });
            self.seeds_collected += 1;
            self.last_correct_time = Some(self.target.display_time.clone());
            self.attempts = 0;
        }
        feedback
    }

    /// Records the current round as abandoned without a correct answer.
    pub fn give_up(&mut self) {
        if self.attempts > 0 {
            self.history.push(Attempt { success: false, attempts: self.attempts });
            self.attempts = 0;
        }
    }

    /// Draws the next target adaptively and resets per-round state.
    pub fn next_challenge_with<R: Rng>(&mut self, rng: &mut R) -> &Challenge {
        let (level, target) = adaptive_challenge_with(
            rng,
            &self.history,
            self.mode,
            self.sequencing_level,
            self.difficulty,
        );
        self.sequencing_level = level;
        self.target = target;
        self.attempts = 0;
        self.snack_seen_this_round = false;
        self.round_complete = false;
        &self.target
    }

    pub fn next_challenge(&mut self) -> &Challenge {
        self.next_challenge_with(&mut rand::thread_rng())
    }

    pub fn metrics(&self) -> ProgressMetrics {
        progress_metrics(&self.history)
    }
}

// --- Accessibility helpers ---------------------------------------------------

/// Keyboard help lines for the current mode and scaffolding step.
pub fn keyboard_instructions(mode: LearningMode, scaffolding_level: u8) -> Vec<&'static str> {
    let mut lines = vec![
        "Use arrow keys to adjust clock hands",
        "Press Space to toggle between analog and digital views",
        "Press S to start the sand timer",
        "Press C with Ctrl to capture progress",
    ];
    if mode == LearningMode::Sequencing {
        lines.push("Press M to cycle through sequencing levels");
    }
    if scaffolding_level == 1 {
        lines.push("Only hour hand is available in this level");
    }
    lines
}
