//! Single opposed check endpoint.

use arbiter_checks::{OpposedOutcome, opposed_check};
use arbiter_core::rng::Mulberry32;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /opposed.
#[derive(Debug, Deserialize)]
pub struct OpposedRequest {
    /// Seed for a reproducible roll-off; omitted means entropy-seeded.
    pub seed: Option<u32>,
    /// Attacker skill.
    pub att_skill: i32,
    /// Attacker modifiers.
    #[serde(default)]
    pub att_mods: i32,
    /// Defender skill.
    pub def_skill: i32,
    /// Defender modifiers.
    #[serde(default)]
    pub def_mods: i32,
}

/// Response body: the outcome plus the seed that produced it.
#[derive(Debug, Serialize)]
pub struct OpposedResponse {
    /// The seed actually used (generated when the request omitted one).
    pub seed: u32,
    /// The resolved roll-off, both sub-outcomes included.
    #[serde(flatten)]
    pub outcome: OpposedOutcome,
}

/// POST /opposed — requires the `player` role.
#[instrument(skip_all)]
async fn opposed(
    AuthUser(claims): AuthUser,
    Json(request): Json<OpposedRequest>,
) -> Result<Json<OpposedResponse>, ApiError> {
    claims.require_role("player")?;

    let mut rng = match request.seed {
        Some(seed) => Mulberry32::new(seed),
        None => Mulberry32::from_entropy(),
    };
    let seed = rng.seed();

    let outcome = opposed_check(
        &mut rng,
        request.att_skill,
        request.att_mods,
        request.def_skill,
        request.def_mods,
    );

    info!(seed, attacker_wins = outcome.attacker_wins, margin = outcome.margin, "resolved opposed check");

    Ok(Json(OpposedResponse { seed, outcome }))
}

/// Returns the router for the opposed-check endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/opposed", post(opposed))
}
