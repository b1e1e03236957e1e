//! Monte Carlo simulation endpoint.

use arbiter_checks::resolve::DEFAULT_K;
use arbiter_core::rng::Mulberry32;
use arbiter_sim::{
    HybridSimResult, LogisticSimResult, OpposedSimResult, simulate_hybrid, simulate_logistic,
    simulate_opposed,
};
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Trials run when the request does not say how many.
pub const DEFAULT_ITERATIONS: u32 = 10_000;

/// Hard cap on trials per request. Protects the server from unbounded CPU
/// consumption; the core itself does no bounding.
pub const MAX_ITERATIONS: u32 = 200_000;

/// Request body for POST /simulate.
#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    /// Algorithm to simulate: `hybrid`, `logistic` or `opposed`. Unknown
    /// names are rejected with a 400, not a deserialization failure.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Trial count; defaulted and capped server-side.
    pub iterations: Option<u32>,
    /// Seed for a reproducible run; omitted means entropy-seeded.
    pub seed: Option<u32>,
    /// Skill for hybrid/logistic runs (and the attacker fallback).
    #[serde(default = "default_skill")]
    pub skill: i32,
    /// Modifiers for hybrid/logistic runs (and the attacker fallback).
    #[serde(default)]
    pub modifiers: i32,
    /// Difficulty class for hybrid/logistic runs.
    #[serde(default = "default_dc")]
    pub dc: i32,
    /// Attacker skill for opposed runs; falls back to `skill`.
    pub att_skill: Option<i32>,
    /// Attacker modifiers for opposed runs; falls back to `modifiers`.
    pub att_mods: Option<i32>,
    /// Defender skill for opposed runs.
    #[serde(default = "default_def_skill")]
    pub def_skill: i32,
    /// Defender modifiers for opposed runs.
    #[serde(default)]
    pub def_mods: i32,
    /// Logistic steepness.
    #[serde(default = "default_k")]
    pub k: f64,
}

fn default_algorithm() -> String {
    "hybrid".to_string()
}

fn default_skill() -> i32 {
    5
}

fn default_dc() -> i32 {
    15
}

fn default_def_skill() -> i32 {
    4
}

fn default_k() -> f64 {
    DEFAULT_K
}

/// The per-algorithm aggregate, serialized without a tag — the field set
/// identifies the variant.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SimResultBody {
    /// Hybrid aggregate.
    Hybrid(HybridSimResult),
    /// Logistic aggregate.
    Logistic(LogisticSimResult),
    /// Opposed aggregate.
    Opposed(OpposedSimResult),
}

/// Response body: the aggregate plus the seed that produced it.
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    /// The seed actually used (generated when the request omitted one).
    pub seed: u32,
    /// Per-algorithm aggregate statistics.
    #[serde(flatten)]
    pub result: SimResultBody,
}

/// POST /simulate — requires the `admin` role.
#[instrument(skip_all, fields(algorithm = %request.algorithm))]
async fn simulate(
    AuthUser(claims): AuthUser,
    Json(request): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, ApiError> {
    claims.require_role("admin")?;

    let iterations = request
        .iterations
        .unwrap_or(DEFAULT_ITERATIONS)
        .min(MAX_ITERATIONS);

    let mut rng = match request.seed {
        Some(seed) => Mulberry32::new(seed),
        None => Mulberry32::from_entropy(),
    };
    let seed = rng.seed();

    let result = match request.algorithm.as_str() {
        "hybrid" => SimResultBody::Hybrid(simulate_hybrid(
            &mut rng,
            iterations,
            request.skill,
            request.modifiers,
            request.dc,
        )?),
        "logistic" => SimResultBody::Logistic(simulate_logistic(
            &mut rng,
            iterations,
            request.skill,
            request.modifiers,
            request.dc,
            request.k,
        )?),
        "opposed" => SimResultBody::Opposed(simulate_opposed(
            &mut rng,
            iterations,
            request.att_skill.unwrap_or(request.skill),
            request.att_mods.unwrap_or(request.modifiers),
            request.def_skill,
            request.def_mods,
        )?),
        other => return Err(ApiError::UnknownAlgorithm(other.to_string())),
    };

    info!(seed, iterations, "simulation complete");

    Ok(Json(SimulateResponse { seed, result }))
}

/// Returns the router for the simulation endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/simulate", post(simulate))
}
