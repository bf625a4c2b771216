/*
 * Responsibility
 * - Load settings from the environment (.env is honoured via dotenvy)
 * - Validate values up front (startup fails on bad config)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

pub const DEFAULT_PUBLIC_ROUTES: [&str; 2] = ["/login", "/register"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // Base URL of the remote auth service (`/api/users/auth/*` lives under it)
    pub api_url: Url,

    pub public_routes: Vec<String>,
    pub cookie_secure: bool,

    pub http_timeout_seconds: u64,

    // Outbound auth calls; always shorter than the global request timeout
    pub auth_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        // Production must point at a real auth service; development falls back to a local one.
        let api_url = match std::env::var("API_URL") {
            Ok(raw) => parse_api_url(&raw)?,
            Err(_) if app_env.is_production() => return Err(ConfigError::Missing("API_URL")),
            Err(_) => parse_api_url("http://localhost:8000")?,
        };

        let public_routes =
            parse_public_routes(&std::env::var("PUBLIC_ROUTES").unwrap_or_default());

        let cookie_secure = parse_cookie_secure(
            std::env::var("COOKIE_SECURE").ok().as_deref(),
            app_env,
        )?;

        let http_timeout_seconds = match std::env::var("HTTP_TIMEOUT_SECONDS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid("HTTP_TIMEOUT_SECONDS"))?,
            Err(_) => 30,
        };

        let auth_timeout = parse_auth_timeout(
            std::env::var("AUTH_TIMEOUT_SECONDS").ok().as_deref(),
            http_timeout_seconds,
        )?;

        Ok(Self {
            addr,
            app_env,
            api_url,
            public_routes,
            cookie_secure,
            http_timeout_seconds,
            auth_timeout,
        })
    }
}

/// Only http(s) base URLs are accepted; a trailing slash is tolerated.
pub(crate) fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|_| ConfigError::Invalid("API_URL"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::Invalid("API_URL")),
    }
}

/// Comma-separated prefixes. Blank input falls back to the defaults.
pub(crate) fn parse_public_routes(raw: &str) -> Vec<String> {
    let routes = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();

    if routes.is_empty() {
        DEFAULT_PUBLIC_ROUTES.iter().map(|s| s.to_string()).collect()
    } else {
        routes
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Unset follows the environment (production → secure); anything unparseable is rejected.
pub(crate) fn parse_cookie_secure(
    raw: Option<&str>,
    app_env: AppEnv,
) -> Result<bool, ConfigError> {
    match raw {
        Some(raw) => parse_bool(raw).ok_or(ConfigError::Invalid("COOKIE_SECURE")),
        None => Ok(app_env.is_production()),
    }
}

/// The auth call must give up before the global timeout so that a slow
/// auth service still ends in a login redirect.
pub(crate) fn parse_auth_timeout(
    raw: Option<&str>,
    http_timeout_seconds: u64,
) -> Result<Duration, ConfigError> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0 && *secs < http_timeout_seconds)
            .map(Duration::from_secs)
            .ok_or(ConfigError::Invalid("AUTH_TIMEOUT_SECONDS")),
        None if http_timeout_seconds > 10 => Ok(Duration::from_secs(10)),
        None => Ok(Duration::from_millis(http_timeout_seconds * 500)),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
