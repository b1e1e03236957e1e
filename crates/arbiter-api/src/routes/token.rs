//! Token issuance endpoint.
//!
//! Only mounted when `ALLOW_TOKEN_ISSUE=true`; intended for development and
//! test environments where no external identity provider signs tokens.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::auth::{self, DEFAULT_TOKEN_LIFETIME_SECS};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /auth/token.
#[derive(Debug, Deserialize, Default)]
pub struct TokenRequest {
    /// Subject to embed in the token.
    pub sub: Option<String>,
    /// Role to grant.
    pub role: Option<String>,
    /// Token lifetime in seconds.
    pub expires_in: Option<i64>,
}

/// Response body carrying the signed token.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// The signed bearer token.
    pub token: String,
}

/// POST /auth/token — unauthenticated by design (it is how callers obtain
/// credentials), gated behind the mount flag instead.
#[instrument(skip_all)]
async fn issue_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = auth::sign_token(
        &state.auth,
        request.sub,
        request.role,
        request.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS),
    )?;

    Ok(Json(TokenResponse { token }))
}

/// Returns the router for the token-issuance endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/auth/token", post(issue_token))
}
