//! Session gate: classify → read cookie → confirm with the auth service → attach `AuthCtx`.
//!
//! Every failure ends in the same `302 /login`. The reason (missing token,
//! rejected token, auth service down, unusable profile) only shows up in logs.
//!
//! ```ignore
//! let router = api::routes();
//! let router = middleware::auth::apply(router, state.clone());
//! let app = router.with_state(state);
//! ```

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use thiserror::Error;

use crate::api::extractors::{AuthCtx, Identity};
use crate::middleware::auth::routes::{LOGIN_PATH, LOGOUT_PATH, RoutePolicy};
use crate::middleware::auth::token::{
    clear_session_cookie, extract_token, session_cookie, sets_session_cookie,
};
use crate::services::auth::{AuthValidator, ValidatorError};
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("no session token")]
    MissingToken,
    #[error(transparent)]
    Validation(#[from] ValidatorError),
}

impl GateError {
    pub fn reason(&self) -> &'static str {
        match self {
            GateError::MissingToken => "missing_token",
            GateError::Validation(err) => err.reason(),
        }
    }
}

/// What the gate decided for one request.
#[derive(Debug)]
pub enum Decision {
    /// Public route; nothing was checked and no identity is attached.
    Public,
    /// Private route with a session the auth service confirmed.
    Authenticated(AuthCtx),
    /// Private route without a usable session.
    Redirect(GateError),
}

/// Decide a single request. Calls the validator at most once and never for public paths.
pub async fn evaluate(
    routes: &RoutePolicy,
    validator: &dyn AuthValidator,
    path: &str,
    headers: &HeaderMap,
) -> Decision {
    if routes.is_public(path) {
        return Decision::Public;
    }

    let Some(token) = extract_token(headers) else {
        return Decision::Redirect(GateError::MissingToken);
    };

    match validator.check(&token).await {
        Ok(verified) => Decision::Authenticated(AuthCtx::new(
            Identity::new(verified.profile, token),
            verified.session_renewed,
        )),
        Err(err) => Decision::Redirect(err.into()),
    }
}

pub fn redirect_to_login() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, LOGIN_PATH)]).into_response()
}

/// Mount the gate on every route of `router` (fallback included).
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, gate_middleware))
}

async fn gate_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();

    let decision = evaluate(&state.routes, state.auth.as_ref(), &path, req.headers()).await;

    match decision {
        Decision::Public => next.run(req).await,
        Decision::Redirect(err) => {
            match &err {
                GateError::MissingToken => {
                    tracing::debug!(path = %path, reason = err.reason(), "redirecting to login")
                }
                GateError::Validation(ValidatorError::Rejected(status)) => tracing::info!(
                    path = %path,
                    reason = err.reason(),
                    status = status.as_u16(),
                    "redirecting to login"
                ),
                GateError::Validation(_) => tracing::warn!(
                    path = %path,
                    reason = err.reason(),
                    backend = state.auth.backend_name(),
                    error = %err,
                    "redirecting to login"
                ),
            }

            if path == LOGOUT_PATH {
                let jar = CookieJar::new().add(clear_session_cookie(state.cookie_secure));
                return (jar, redirect_to_login()).into_response();
            }
            redirect_to_login()
        }
        Decision::Authenticated(ctx) => {
            tracing::debug!(path = %path, renewed = ctx.session_renewed, "session verified");

            // Renewal re-issues the token the browser already holds.
            let renewal = ctx
                .session_renewed
                .then(|| session_cookie(ctx.token().to_owned(), state.cookie_secure));

            req.extensions_mut().insert(ctx);
            let res = next.run(req).await;

            match renewal {
                // A handler writing the cookie itself (logout) wins.
                Some(cookie) if !sets_session_cookie(res.headers()) => {
                    (CookieJar::new().add(cookie), res).into_response()
                }
                _ => res,
            }
        }
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
