/*
 * Responsibility
 * - The "verified identity" type handlers see
 * - The gate builds it and stores it in request extensions; handlers only receive this type
 */
use serde::Serialize;
use serde_json::{Map, Value};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// User profile from the auth service plus the token it was verified with.
///
/// Serializes flat: `{"id":7,"name":"Ana","accessToken":"abc123"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
    #[serde(flatten)]
    pub profile: Map<String, Value>,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

impl Identity {
    /// A profile field named `accessToken` is replaced by the verified token.
    pub fn new(mut profile: Map<String, Value>, access_token: String) -> Self {
        profile.remove(ACCESS_TOKEN_KEY);
        Self {
            profile,
            access_token,
        }
    }
}

/// Context attached to a request the gate let through on a valid session.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub identity: Identity,
    pub session_renewed: bool,
}

impl AuthCtx {
    pub fn new(identity: Identity, session_renewed: bool) -> Self {
        Self {
            identity,
            session_renewed,
        }
    }

    pub fn token(&self) -> &str {
        &self.identity.access_token
    }
}
