// Native tests for the API boundary contracts: request parsing, the 400
// path for malformed submissions, and response payload shapes.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use garden_clock::api::{
    generate_time_with, health, save_progress, save_progress_json, submit_answer,
    submit_answer_json, time_challenges_with, ApiError, ProgressRecord, SubmitAnswerRequest,
};

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

#[test]
fn string_typed_hour_is_rejected_as_invalid_input() {
    let body = r#"{"hour":"3","minute":0,"targetHour":3,"targetMinute":0}"#;
    match submit_answer_json(body) {
        Err(ApiError::InvalidInput(_)) => {}
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn missing_fields_are_rejected_as_invalid_input() {
    let body = r#"{"hour":3,"minute":0}"#;
    let err = submit_answer_json(body).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
    assert_eq!(err.status(), 400);
    assert!(err.body().contains("error"));
}

#[test]
fn valid_submission_reports_match_and_difference() {
    let body = r#"{"hour":3,"minute":0,"targetHour":3,"targetMinute":2}"#;
    let response = submit_answer_json(body).expect("valid body");
    let v: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(v["correct"], true);
    assert_eq!(v["difference"], 2);
    assert_eq!(v["submittedTime"], "3 o'clock");
    assert_eq!(v["targetTime"], "3:02");
}

#[test]
fn wrap_around_is_correct_but_difference_stays_plain() {
    let req = SubmitAnswerRequest {
        hour: 11,
        minute: 58,
        target_hour: 0,
        target_minute: 2,
        tolerance: None,
    };
    let resp = submit_answer(&req);
    // Judged 4 minutes apart the short way around...
    assert!(resp.correct);
    // ...while the feedback difference is the plain face distance.
    assert_eq!(resp.difference, 716);

    let strict = SubmitAnswerRequest { tolerance: Some(3), ..req };
    assert!(!submit_answer(&strict).correct);
}

#[test]
fn explicit_tolerance_overrides_the_default() {
    let req = SubmitAnswerRequest {
        hour: 4,
        minute: 10,
        target_hour: 4,
        target_minute: 0,
        tolerance: Some(15),
    };
    assert!(submit_answer(&req).correct);
    let strict = SubmitAnswerRequest { tolerance: Some(5), ..req };
    assert!(!submit_answer(&strict).correct);
}

#[test]
fn generate_time_honors_the_difficulty_query() {
    let mut rng = rng();
    for _ in 0..50 {
        let pair = generate_time_with(&mut rng, Some("easy"));
        assert_eq!(pair.minute, 0);
        assert!(pair.hour < 12);
    }
    // Absent and unknown difficulties take the full-minute default tier
    for _ in 0..50 {
        let pair = generate_time_with(&mut rng, None);
        assert!(pair.minute < 60);
        let pair = generate_time_with(&mut rng, Some("bogus"));
        assert!(pair.minute < 60);
    }
}

#[test]
fn time_challenges_defaults_and_clamps_its_count() {
    let mut rng = rng();
    assert_eq!(time_challenges_with(&mut rng, None, None).challenges.len(), 5);
    assert_eq!(time_challenges_with(&mut rng, Some(12), Some("hard")).challenges.len(), 12);
    assert_eq!(time_challenges_with(&mut rng, Some(0), None).challenges.len(), 1);
    assert_eq!(time_challenges_with(&mut rng, Some(10_000), None).challenges.len(), 100);
}

#[test]
fn time_challenges_respect_the_requested_tier() {
    let mut rng = rng();
    let batch = time_challenges_with(&mut rng, Some(100), Some("medium")).challenges;
    for pair in batch {
        assert!([0, 15, 30, 45].contains(&pair.minute));
    }
}

#[test]
fn save_progress_echoes_its_input_without_persisting() {
    let record = ProgressRecord {
        user_id: Some("bunny-7".to_owned()),
        seeds_collected: Some(14),
        snack_times_unlocked: Some(3),
        last_correct_time: Some("Half past 9".to_owned()),
    };
    let resp = save_progress(record.clone());
    assert!(resp.success);
    assert_eq!(resp.progress.user_id.as_deref(), Some("bunny-7"));
    assert_eq!(resp.progress.seeds_collected, Some(14));
    assert_eq!(resp.progress.snack_times_unlocked, Some(3));
    assert_eq!(resp.progress.last_correct_time.as_deref(), Some("Half past 9"));
}

#[test]
fn save_progress_json_accepts_partial_records() {
    let resp = save_progress_json(r#"{"userId":"x"}"#).expect("partial record");
    let v: serde_json::Value = serde_json::from_str(&resp).unwrap();
    assert_eq!(v["success"], true);
    assert_eq!(v["progress"]["userId"], "x");
    assert!(v["progress"]["seedsCollected"].is_null());
}

#[test]
fn health_reports_ok_with_a_timestamp() {
    let resp = health();
    assert_eq!(resp.status, "OK");
    assert!(resp.timestamp > 0.0);
}

#[test]
fn error_kinds_map_to_their_http_statuses() {
    assert_eq!(ApiError::InvalidInput("x".into()).status(), 400);
    assert_eq!(ApiError::UpstreamUnavailable("x".into()).status(), 502);
    assert_eq!(ApiError::Unexpected("x".into()).status(), 500);
    assert!(ApiError::InvalidInput("bad hour".into()).to_string().contains("Invalid time format"));
}

#[test]
fn camel_case_request_fields_parse() {
    let body = r#"{"hour":1,"minute":30,"targetHour":1,"targetMinute":30,"tolerance":0}"#;
    let v: serde_json::Value =
        serde_json::from_str(&submit_answer_json(body).unwrap()).unwrap();
    assert_eq!(v["correct"], true);
    assert_eq!(v["difference"], 0);
}
