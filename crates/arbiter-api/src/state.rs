//! Shared application state.

use std::sync::Arc;

use jsonwebtoken::{DecodingKey, EncodingKey};

/// Signing and verification keys for bearer tokens, derived from one HMAC
/// secret.
pub struct AuthKeys {
    /// Key used to sign issued tokens.
    pub encoding: EncodingKey,
    /// Key used to verify presented tokens.
    pub decoding: DecodingKey,
}

impl AuthKeys {
    /// Derive both keys from a shared secret.
    #[must_use]
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Token keys, shared read-only.
    pub auth: Arc<AuthKeys>,
}

impl AppState {
    /// Create new application state from the token secret.
    #[must_use]
    pub fn new(jwt_secret: &str) -> Self {
        Self {
            auth: Arc::new(AuthKeys::from_secret(jwt_secret)),
        }
    }
}
