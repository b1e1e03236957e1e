//! Bearer-token authorization.
//!
//! Tokens are HMAC-signed JWTs carrying an optional subject and role.
//! Handlers receive verified claims through the [`AuthUser`] extractor and
//! enforce their own role requirement; `admin` passes every role check.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::Utc;
use jsonwebtoken::{Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::{AppState, AuthKeys};

/// Default token lifetime when the issuance request does not specify one.
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// Claims carried by an Arbiter bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Token subject (caller identity), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Role granted to the caller, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Expiry as a Unix timestamp.
    pub exp: i64,
}

impl Claims {
    /// Enforce that the caller holds `required` (or `admin`, which passes
    /// any check).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Forbidden`] when the role is absent or does not
    /// match.
    pub fn require_role(&self, required: &str) -> Result<(), ApiError> {
        match self.role.as_deref() {
            Some("admin") => Ok(()),
            Some(role) if role == required => Ok(()),
            _ => Err(ApiError::Forbidden),
        }
    }
}

/// Extractor carrying the verified claims of the presenting caller.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthorized("missing authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized("invalid authorization header"))?;

        let data = decode::<Claims>(token, &state.auth.decoding, &Validation::default())
            .map_err(|_| ApiError::Unauthorized("invalid or expired token"))?;

        Ok(Self(data.claims))
    }
}

/// Sign a token for the given subject and role, expiring `lifetime_secs`
/// from now.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] if signing fails (malformed key
/// material; not reachable with HMAC secrets).
pub fn sign_token(
    keys: &AuthKeys,
    sub: Option<String>,
    role: Option<String>,
    lifetime_secs: i64,
) -> Result<String, ApiError> {
    let claims = Claims {
        sub,
        role,
        exp: Utc::now().timestamp() + lifetime_secs,
    };

    encode(&Header::default(), &claims, &keys.encoding)
        .map_err(|_| ApiError::Unauthorized("could not sign token"))
}
