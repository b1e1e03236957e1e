//! Environment-driven server configuration.

use crate::error::AppError;

/// Server configuration read from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind address, `HOST` (default `0.0.0.0`).
    pub host: String,
    /// Bind port, `PORT` (default `3000`).
    pub port: u16,
    /// HMAC secret for bearer tokens, `JWT_SECRET` (default `dev-secret`;
    /// set a real secret outside development).
    pub jwt_secret: String,
    /// Whether the token-issuance endpoint is mounted,
    /// `ALLOW_TOKEN_ISSUE=true` (default off).
    pub allow_token_issue: bool,
}

impl AppConfig {
    /// Read configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if `PORT` is set but not a valid `u16`.
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret".to_string());
        let allow_token_issue = std::env::var("ALLOW_TOKEN_ISSUE")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            jwt_secret,
            allow_token_issue,
        })
    }
}
