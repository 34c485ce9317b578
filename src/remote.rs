//! Best-effort calls to the clock API service, each with an in-process
//! fallback.
//!
//! The arithmetic core works identically online and offline: every fetch
//! here is a single attempt (no retries, no timeouts beyond the browser's),
//! and any failure — network down, non-2xx status, bad body — degrades to
//! computing the same result locally. The learner never sees an upstream
//! failure.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Request, RequestInit, RequestMode, Response};

use crate::api::{self, ApiError, ProgressRecord, SaveProgressResponse, SubmitAnswerRequest,
    SubmitAnswerResponse, TimePair};
use crate::challenge::{self, Challenge, Difficulty};

/// Base URL of the backend when none is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Fetches a target time from the service, generating locally on failure.
pub async fn fetch_challenge(base_url: &str, difficulty: Difficulty) -> Challenge {
    match try_fetch_challenge(base_url, difficulty).await {
        Ok(challenge) => challenge,
        Err(err) => {
            warn("generate-time", &err);
            challenge::generate(difficulty)
        }
    }
}

/// Submits an answer for validation, judging locally on failure.
pub async fn submit_answer(base_url: &str, req: &SubmitAnswerRequest) -> SubmitAnswerResponse {
    match try_submit_answer(base_url, req).await {
        Ok(resp) => resp,
        Err(err) => {
            warn("submit-answer", &err);
            api::submit_answer(req)
        }
    }
}

/// Saves progress upstream; acknowledges locally on failure (there is no
/// real persistence behind the endpoint either way).
pub async fn save_progress(base_url: &str, record: ProgressRecord) -> SaveProgressResponse {
    match try_save_progress(base_url, &record).await {
        Ok(resp) => resp,
        Err(err) => {
            warn("save-progress", &err);
            SaveProgressResponse {
                success: true,
                message: "Progress saved locally".to_owned(),
                progress: record,
            }
        }
    }
}

async fn try_fetch_challenge(base_url: &str, difficulty: Difficulty) -> Result<Challenge, ApiError> {
    let url = format!("{base_url}/generate-time?difficulty={}", difficulty.as_str());
    let body = fetch_text(&url, "GET", None).await?;
    let pair: TimePair =
        serde_json::from_str(&body).map_err(|e| ApiError::UpstreamUnavailable(e.to_string()))?;
    Ok(Challenge::new(pair.hour, pair.minute))
}

async fn try_submit_answer(
    base_url: &str,
    req: &SubmitAnswerRequest,
) -> Result<SubmitAnswerResponse, ApiError> {
    let url = format!("{base_url}/submit-answer");
    let payload =
        serde_json::to_string(req).map_err(|e| ApiError::Unexpected(e.to_string()))?;
    let body = fetch_text(&url, "POST", Some(&payload)).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::UpstreamUnavailable(e.to_string()))
}

async fn try_save_progress(
    base_url: &str,
    record: &ProgressRecord,
) -> Result<SaveProgressResponse, ApiError> {
    let url = format!("{base_url}/save-progress");
    let payload =
        serde_json::to_string(record).map_err(|e| ApiError::Unexpected(e.to_string()))?;
    let body = fetch_text(&url, "POST", Some(&payload)).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::UpstreamUnavailable(e.to_string()))
}

/// One fetch round-trip returning the response body as text. Non-2xx
/// statuses and JS-level failures both surface as `UpstreamUnavailable`.
async fn fetch_text(url: &str, method: &str, json_body: Option<&str>) -> Result<String, ApiError> {
    let win = window().ok_or_else(|| ApiError::Unexpected("no window".to_owned()))?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = json_body {
        opts.set_body(&JsValue::from_str(body));
    }
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    if json_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_err)?;
    }

    let resp: Response = JsFuture::from(win.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        return Err(ApiError::UpstreamUnavailable(format!("status {}", resp.status())));
    }
    let text = JsFuture::from(resp.text().map_err(js_err)?).await.map_err(js_err)?;
    text.as_string()
        .ok_or_else(|| ApiError::UpstreamUnavailable("non-text response body".to_owned()))
}

fn js_err(value: JsValue) -> ApiError {
    ApiError::UpstreamUnavailable(format!("{value:?}"))
}

fn warn(endpoint: &str, err: &ApiError) {
    web_sys::console::warn_1(&JsValue::from_str(&format!(
        "{endpoint} unavailable, falling back locally: {err}"
    )));
}
