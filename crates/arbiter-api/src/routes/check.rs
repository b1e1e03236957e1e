//! Single hybrid check endpoint.

use arbiter_checks::{CheckOutcome, hybrid_check};
use arbiter_core::rng::Mulberry32;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /check.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    /// Seed for a reproducible roll; omitted means entropy-seeded.
    pub seed: Option<u32>,
    /// Skill value added to the roll.
    pub skill: i32,
    /// Situational modifiers added to the roll.
    #[serde(default)]
    pub modifiers: i32,
    /// Difficulty class the total must meet or exceed.
    pub dc: i32,
}

/// Response body: the outcome plus the seed that produced it, so any run can
/// be replayed.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    /// The seed actually used (generated when the request omitted one).
    pub seed: u32,
    /// The resolved outcome.
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

/// POST /check — requires the `player` role.
#[instrument(skip_all, fields(dc = request.dc))]
async fn check(
    AuthUser(claims): AuthUser,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, ApiError> {
    claims.require_role("player")?;

    let mut rng = match request.seed {
        Some(seed) => Mulberry32::new(seed),
        None => Mulberry32::from_entropy(),
    };
    let seed = rng.seed();

    let outcome = hybrid_check(&mut rng, request.skill, request.modifiers, request.dc);

    info!(seed, roll = outcome.roll, success = outcome.success, "resolved hybrid check");

    Ok(Json(CheckResponse { seed, outcome }))
}

/// Returns the router for the single-check endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/check", post(check))
}
