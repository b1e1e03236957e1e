//! Integration tests for the simulation endpoint.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_simulate_defaults_to_hybrid_with_10k_iterations() {
    let token = common::bearer_token(Some("admin"));
    let body = json!({ "seed": 1 });

    let (status, json) =
        common::post_json(common::build_test_app(), "/simulate", Some(&token), &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["iterations"].as_u64().unwrap(), 10_000);
    assert!(json["success_rate"].is_f64());
    assert!(json["crits"].is_u64());
    assert!(json["fumbles"].is_u64());
}

#[tokio::test]
async fn test_simulate_caps_iterations_at_200k() {
    let token = common::bearer_token(Some("admin"));
    let body = json!({ "seed": 1, "iterations": 1_000_000 });

    let (status, json) =
        common::post_json(common::build_test_app(), "/simulate", Some(&token), &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["iterations"].as_u64().unwrap(), 200_000);
}

#[tokio::test]
async fn test_simulate_with_same_seed_is_reproducible() {
    let token = common::bearer_token(Some("admin"));
    let body = json!({ "seed": 42, "iterations": 5000, "skill": 5, "dc": 15 });

    let (_, first) =
        common::post_json(common::build_test_app(), "/simulate", Some(&token), &body).await;
    let (_, second) =
        common::post_json(common::build_test_app(), "/simulate", Some(&token), &body).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_simulate_logistic_reports_avg_p() {
    let token = common::bearer_token(Some("admin"));
    // diff = 0 => every trial's probability is exactly 0.5
    let body = json!({ "algorithm": "logistic", "seed": 3, "iterations": 1000, "skill": 5, "dc": 5 });

    let (status, json) =
        common::post_json(common::build_test_app(), "/simulate", Some(&token), &body).await;

    assert_eq!(status, StatusCode::OK);
    assert!((json["avg_p"].as_f64().unwrap() - 0.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_simulate_opposed_reports_win_rate() {
    let token = common::bearer_token(Some("admin"));
    let body = json!({
        "algorithm": "opposed",
        "seed": 8,
        "iterations": 2000,
        "att_skill": 3,
        "def_skill": 2
    });

    let (status, json) =
        common::post_json(common::build_test_app(), "/simulate", Some(&token), &body).await;

    assert_eq!(status, StatusCode::OK);
    let win_rate = json["win_rate"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&win_rate));
    assert!(json["avg_margin"].is_f64());
}

#[tokio::test]
async fn test_simulate_zero_iterations_returns_400() {
    let token = common::bearer_token(Some("admin"));
    let body = json!({ "seed": 1, "iterations": 0 });

    let (status, json) =
        common::post_json(common::build_test_app(), "/simulate", Some(&token), &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_iterations");
}

#[tokio::test]
async fn test_simulate_unknown_algorithm_returns_400_with_error_body() {
    let token = common::bearer_token(Some("admin"));
    let body = json!({ "algorithm": "chaotic", "seed": 1 });

    let (status, json) =
        common::post_json(common::build_test_app(), "/simulate", Some(&token), &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "unknown_algorithm");
    assert!(json["message"].as_str().unwrap().contains("chaotic"));
}
