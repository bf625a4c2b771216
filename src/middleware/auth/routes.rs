//! Public/private route classification.

use crate::config::DEFAULT_PUBLIC_ROUTES;

/// Redirect target for every gate failure.
pub const LOGIN_PATH: &str = "/login";

/// Always leaves the browser without a session cookie, even when the gate refuses it.
pub const LOGOUT_PATH: &str = "/logout";

/// Anything under this prefix bypasses the gate.
pub const API_PREFIX: &str = "/api/";

/// Static allow-list of public path prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePolicy {
    public_prefixes: Vec<String>,
}

impl RoutePolicy {
    /// `LOGIN_PATH` is always public, otherwise the redirect would loop.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut public_prefixes: Vec<String> = prefixes
            .into_iter()
            .map(Into::into)
            .filter(|p| !p.is_empty())
            .collect();

        if !public_prefixes.iter().any(|p| p == LOGIN_PATH) {
            public_prefixes.push(LOGIN_PATH.to_string());
        }

        Self { public_prefixes }
    }

    /// Plain prefix match: `/login-help` is public, `/apix` is not.
    pub fn is_public(&self, path: &str) -> bool {
        path.starts_with(API_PREFIX)
            || self
                .public_prefixes
                .iter()
                .any(|prefix| path.starts_with(prefix.as_str()))
    }

    pub fn public_prefixes(&self) -> &[String] {
        &self.public_prefixes
    }
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_ROUTES)
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
