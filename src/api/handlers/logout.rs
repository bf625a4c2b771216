/*
 * Responsibility
 * - POST /logout: end the session on the auth service, drop the cookie, back to /login
 * - The browser is logged out locally even if the auth service call fails
 */
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::extractors::AuthCtxExtractor;
use crate::middleware::auth::{clear_session_cookie, redirect_to_login};
use crate::state::AppState;

pub async fn logout(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Response {
    if let Err(err) = state.auth.logout(ctx.token()).await {
        tracing::warn!(
            reason = err.reason(),
            backend = state.auth.backend_name(),
            error = %err,
            "remote logout failed"
        );
    }

    let jar = CookieJar::new().add(clear_session_cookie(state.cookie_secure));
    (jar, redirect_to_login()).into_response()
}
