//! HTTP client for the remote auth service (`/api/users/auth/*`).
use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;
use url::Url;

use crate::services::auth::validator::{AuthValidator, ValidatorError, Verified};

const CHECK_PATH: &str = "api/users/auth/check";
const LOGOUT_PATH: &str = "api/users/auth/logout";

#[derive(Clone, Debug)]
pub struct RemoteAuthValidator {
    client: reqwest::Client,
    check_url: Url,
    logout_url: Url,
}

impl RemoteAuthValidator {
    /// `base` is the auth service root, e.g. `http://localhost:8000`.
    /// A path on the base (`https://host/backend`) is kept.
    pub fn new(client: reqwest::Client, base: &Url) -> Result<Self, url::ParseError> {
        let base = with_trailing_slash(base);
        Ok(Self {
            client,
            check_url: base.join(CHECK_PATH)?,
            logout_url: base.join(LOGOUT_PATH)?,
        })
    }

    pub fn check_url(&self) -> &Url {
        &self.check_url
    }
}

fn with_trailing_slash(base: &Url) -> Url {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

#[async_trait]
impl AuthValidator for RemoteAuthValidator {
    fn backend_name(&self) -> &'static str {
        "remote"
    }

    async fn check(&self, token: &str) -> Result<Verified, ValidatorError> {
        let resp = self
            .client
            .post(self.check_url.clone())
            .bearer_auth(token)
            .send()
            .await
            .map_err(ValidatorError::Transport)?;

        let status = resp.status();
        tracing::debug!(status = status.as_u16(), "auth check response");

        if !status.is_success() {
            return Err(ValidatorError::Rejected(status));
        }

        // Only presence matters; the cookie value itself is not interpreted.
        let session_renewed = resp.headers().contains_key(header::SET_COOKIE);

        let body = resp.bytes().await.map_err(ValidatorError::Transport)?;
        let profile = match serde_json::from_slice::<Value>(&body) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(ValidatorError::InvalidBody(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )));
            }
            Err(e) => return Err(ValidatorError::InvalidBody(e.to_string())),
        };

        Ok(Verified {
            profile,
            session_renewed,
        })
    }

    async fn logout(&self, token: &str) -> Result<(), ValidatorError> {
        let resp = self
            .client
            .post(self.logout_url.clone())
            .bearer_auth(token)
            .send()
            .await
            .map_err(ValidatorError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ValidatorError::Rejected(status));
        }
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;
