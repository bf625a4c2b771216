/*
 * Responsibility
 * - URL layout of the dashboard
 * - Which paths are public is decided by the gate (RoutePolicy), not here
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{fallback::not_found, health::health, logout::logout, pages::layout};
use crate::middleware::auth::LOGOUT_PATH;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/login", get(layout))
        .route("/register", get(layout))
        .route("/", get(layout))
        .route("/dashboard", get(layout))
        .route(LOGOUT_PATH, post(logout))
        .fallback(not_found)
}
