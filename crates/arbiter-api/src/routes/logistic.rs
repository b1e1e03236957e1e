//! Logistic probability endpoint. No randomness involved.

use arbiter_checks::logistic_probability;
use arbiter_checks::resolve::DEFAULT_K;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /logistic.
#[derive(Debug, Deserialize)]
pub struct LogisticRequest {
    /// Skill value.
    pub skill: i32,
    /// Situational modifiers.
    #[serde(default)]
    pub modifiers: i32,
    /// Difficulty class.
    pub dc: i32,
    /// Steepness of the success curve.
    #[serde(default = "default_k")]
    pub k: f64,
}

fn default_k() -> f64 {
    DEFAULT_K
}

/// Response body for POST /logistic.
#[derive(Debug, Serialize)]
pub struct LogisticResponse {
    /// Success probability.
    pub p: f64,
    /// The skill-vs-difficulty differential the probability was computed
    /// from.
    pub diff: f64,
}

/// POST /logistic — requires the `player` role.
#[instrument(skip_all, fields(dc = request.dc, k = request.k))]
async fn logistic(
    AuthUser(claims): AuthUser,
    Json(request): Json<LogisticRequest>,
) -> Result<Json<LogisticResponse>, ApiError> {
    claims.require_role("player")?;

    let diff = f64::from(request.skill + request.modifiers - request.dc);
    let p = logistic_probability(diff, request.k, 0.0)?;

    Ok(Json(LogisticResponse { p, diff }))
}

/// Returns the router for the logistic endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/logistic", post(logistic))
}
