use axum::http::{header, HeaderMap};
use subtle::ConstantTimeEq;

use crate::config::AuthConfig;
use crate::error::AppError;

/// Shared-secret bearer authentication for worker-triggered routes.
pub struct BearerAuth {
    secret: Vec<u8>,
}

impl BearerAuth {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.secret_key.as_bytes().to_vec(),
        }
    }

    /// Exact, case-sensitive match against the configured secret.
    pub fn verify(&self, token: &str) -> bool {
        !self.secret.is_empty() && bool::from(token.as_bytes().ct_eq(&self.secret))
    }

    pub fn authorize(&self, headers: &HeaderMap) -> Result<(), AppError> {
        match extract_bearer_token(headers) {
            Some(token) if self.verify(token) => Ok(()),
            Some(_) => {
                tracing::debug!("Invalid bearer token provided");
                Err(AppError::Unauthorized)
            }
            None => {
                tracing::debug!("Missing bearer token");
                Err(AppError::Unauthorized)
            }
        }
    }
}

/// Extract bearer token from Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}
