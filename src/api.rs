//! Typed request/response contracts for the clock API, plus the pure
//! handlers behind them.
//!
//! The HTTP framing itself (routing, CORS, listener) lives outside this
//! crate; a server wraps these handlers, and the browser build reaches the
//! same logic through [`crate::remote`] with an in-process fallback. Field
//! names serialize in camelCase to match the wire format the frontend
//! already speaks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::challenge::{self, Challenge, Difficulty, DEFAULT_TOLERANCE_MINUTES};
use crate::clock::{self, ClockTime};
use crate::display::format_time;

/// Default and maximum batch sizes for the time-challenges endpoint.
const DEFAULT_CHALLENGE_COUNT: usize = 5;
const MAX_CHALLENGE_COUNT: usize = 100;

// --- Errors ------------------------------------------------------------------

/// The three failure kinds the API surface can produce.
///
/// `UpstreamUnavailable` never reaches the learner: callers recover by
/// computing the result in-process (see [`crate::remote`]).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or non-numeric submission fields; maps to HTTP 400.
    #[error("Invalid time format: {0}")]
    InvalidInput(String),
    /// The generator/validator service could not be reached.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),
    /// Anything else; maps to HTTP 500, logged, non-fatal.
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    /// HTTP status a server wrapper should answer with.
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::UpstreamUnavailable(_) => 502,
            Self::Unexpected(_) => 500,
        }
    }

    /// JSON error body (`{"error": ...}`).
    pub fn body(&self) -> String {
        serde_json::json!({ "error": self.to_string() }).to_string()
    }
}

// --- Wire types --------------------------------------------------------------

/// `GET /generate-time` and each element of `GET /time-challenges`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePair {
    pub hour: u8,
    pub minute: u8,
}

impl From<&Challenge> for TimePair {
    fn from(c: &Challenge) -> Self {
        Self { hour: c.hour, minute: c.minute }
    }
}

/// `POST /submit-answer` body. All four time fields are required and must
/// be JSON numbers; serde rejects strings like `"3"` outright, which is how
/// the 400 path triggers.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub hour: i32,
    pub minute: i32,
    pub target_hour: i32,
    pub target_minute: i32,
    pub tolerance: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerResponse {
    pub correct: bool,
    /// Plain absolute minute difference, for feedback copy. Correctness is
    /// judged on the circular distance, not this value.
    pub difference: i32,
    pub submitted_time: String,
    pub target_time: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimeChallengesResponse {
    pub challenges: Vec<TimePair>,
}

/// `POST /save-progress` body. Everything is optional; the endpoint is an
/// acknowledgment stub and echoes whatever it was given.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub user_id: Option<String>,
    pub seeds_collected: Option<u32>,
    pub snack_times_unlocked: Option<u32>,
    pub last_correct_time: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveProgressResponse {
    pub success: bool,
    pub message: String,
    pub progress: ProgressRecord,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
}

// --- Handlers ----------------------------------------------------------------

/// `GET /generate-time?difficulty=...`. Unrecognized or absent difficulty
/// strings take the full-minute default tier.
pub fn generate_time(difficulty: Option<&str>) -> TimePair {
    generate_time_with(&mut rand::thread_rng(), difficulty)
}

pub fn generate_time_with<R: rand::Rng>(rng: &mut R, difficulty: Option<&str>) -> TimePair {
    let tier = difficulty.map(Difficulty::parse).unwrap_or_default();
    TimePair::from(&challenge::generate_with(rng, tier))
}

/// `POST /submit-answer` on an already-parsed body.
pub fn submit_answer(req: &SubmitAnswerRequest) -> SubmitAnswerResponse {
    let submitted = ClockTime::new(req.hour, req.minute);
    let target = ClockTime::new(req.target_hour, req.target_minute);
    let tolerance = req.tolerance.unwrap_or(DEFAULT_TOLERANCE_MINUTES);
    SubmitAnswerResponse {
        correct: clock::is_match(submitted, target, tolerance),
        difference: (submitted.face_minutes() - target.face_minutes()).abs(),
        submitted_time: format_time(req.hour, req.minute),
        target_time: format_time(req.target_hour, req.target_minute),
    }
}

/// `POST /submit-answer` from a raw JSON body. Malformed bodies (missing
/// fields, string-typed numbers) come back as [`ApiError::InvalidInput`].
pub fn submit_answer_json(body: &str) -> Result<String, ApiError> {
    let req: SubmitAnswerRequest = serde_json::from_str(body)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    serde_json::to_string(&submit_answer(&req)).map_err(|e| ApiError::Unexpected(e.to_string()))
}

/// `GET /time-challenges?count=N&difficulty=...`. Count defaults to 5 and
/// is clamped to 1..=100.
pub fn time_challenges(count: Option<usize>, difficulty: Option<&str>) -> TimeChallengesResponse {
    time_challenges_with(&mut rand::thread_rng(), count, difficulty)
}

pub fn time_challenges_with<R: rand::Rng>(
    rng: &mut R,
    count: Option<usize>,
    difficulty: Option<&str>,
) -> TimeChallengesResponse {
    let count = count.unwrap_or(DEFAULT_CHALLENGE_COUNT).clamp(1, MAX_CHALLENGE_COUNT);
    let tier = difficulty.map(Difficulty::parse).unwrap_or_default();
    TimeChallengesResponse {
        challenges: challenge::generate_batch_with(rng, count, tier)
            .iter()
            .map(TimePair::from)
            .collect(),
    }
}

/// `POST /save-progress`. No persistence exists; the record is echoed back
/// with a success acknowledgment.
pub fn save_progress(record: ProgressRecord) -> SaveProgressResponse {
    SaveProgressResponse {
        success: true,
        message: "Progress saved successfully".to_owned(),
        progress: record,
    }
}

pub fn save_progress_json(body: &str) -> Result<String, ApiError> {
    let record: ProgressRecord = serde_json::from_str(body)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    serde_json::to_string(&save_progress(record)).map_err(|e| ApiError::Unexpected(e.to_string()))
}

/// `GET /health`.
pub fn health() -> HealthResponse {
    HealthResponse { status: "OK".to_owned(), timestamp: now_ms() }
}

/// Wall-clock milliseconds since the epoch: `Date.now()` in the browser,
/// `SystemTime` on native hosts.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}
