//! Seam between the request gate and whatever confirms a session token.
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;

/// Outcome of a successful token check.
#[derive(Debug, Clone, PartialEq)]
pub struct Verified {
    /// User profile as returned by the auth service. Its shape is owned by that service.
    pub profile: Map<String, Value>,
    /// The auth service asked for the session cookie to be refreshed (`set-cookie` present).
    pub session_renewed: bool,
}

/// Validator failures. Callers collapse all of these into a redirect,
/// the variants exist so logs can tell them apart.
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("auth service rejected the token: {0}")]
    Rejected(StatusCode),
    #[error("auth service unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("auth service returned an invalid profile: {0}")]
    InvalidBody(String),
}

impl ValidatorError {
    /// Stable label for the `reason` log field.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidatorError::Rejected(_) => "rejected",
            ValidatorError::Transport(_) => "upstream_unavailable",
            ValidatorError::InvalidBody(_) => "invalid_profile",
        }
    }
}

/// Implementations must be cheap to share (`Arc<dyn AuthValidator>` in `AppState`).
///
/// No caching: every `check` is one round trip.
#[async_trait]
pub trait AuthValidator: Send + Sync + 'static {
    // Returns the validator backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // Verify `token` as a bearer credential.
    async fn check(&self, token: &str) -> Result<Verified, ValidatorError>;

    // End the session identified by `token` on the auth service.
    async fn logout(&self, token: &str) -> Result<(), ValidatorError>;
}
