//! Factory: build the auth validator from application `Config`.
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::AppError;
use crate::services::auth::{AuthValidator, RemoteAuthValidator};

pub fn build_auth_validator(config: &Config) -> Result<Arc<dyn AuthValidator>, AppError> {
    let client = auth_http_client(config.auth_timeout).map_err(|err| {
        tracing::error!(error = %err, "failed to build http client");
        AppError::Internal
    })?;

    let validator = RemoteAuthValidator::new(client, &config.api_url).map_err(|err| {
        tracing::error!(error = %err, api_url = %config.api_url, "invalid auth service url");
        AppError::Internal
    })?;

    tracing::info!(
        check_url = %validator.check_url(),
        timeout_ms = config.auth_timeout.as_millis() as u64,
        "auth validator ready"
    );

    Ok(Arc::new(validator))
}

/// An elapsed `timeout` surfaces as `ValidatorError::Transport`.
pub(crate) fn auth_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
}
