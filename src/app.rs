/*
 * Responsibility
 * - Tracing (format by APP_ENV) + panic hook
 * - Config → dependencies → Router assembly
 * - Middleware order: gate (per route) → security headers → HTTP stack (outermost)
 * - axum::serve() until ctrl-c
 */
use std::any::Any;
use std::time::Duration;
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppEnv, Config};
use crate::error::AppError;
use crate::middleware::auth::RoutePolicy;
use crate::services::auth::build_auth_validator;
use crate::state::AppState;
use crate::{api, middleware};

const DEFAULT_LOG_FILTER: &str = "info,salon_dashboard=info,tower_http=info";

/// JSON lines in production, compact human output otherwise. `RUST_LOG` overrides the filter.
fn init_tracing(app_env: AppEnv) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    if app_env.is_production() {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry.with(fmt::layer().compact().with_target(false)).init();
    }
}

fn install_panic_hook(app_env: AppEnv) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let payload = panic_message(info.payload());
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_default();
        tracing::error!(panic.payload = payload, panic.location = %location, "thread panicked");

        default_hook(info);
        if !app_env.is_production() {
            process::abort();
        }
    }))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let app_env = AppEnv::from_env();
    init_tracing(app_env);
    install_panic_hook(app_env);

    let config = Config::from_env()?;

    tracing::info!(
        "starting dashboard in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config)?;
    tracing::info!(
        public_routes = ?state.routes.public_prefixes(),
        cookie_secure = state.cookie_secure,
        "auth gate configured"
    );

    let app = build_router(state, Duration::from_secs(config.http_timeout_seconds));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn build_state(config: &Config) -> Result<AppState, AppError> {
    let auth = build_auth_validator(config)?;
    let routes = RoutePolicy::new(config.public_routes.iter().cloned());
    Ok(AppState::new(auth, routes, config.cookie_secure))
}

pub(crate) fn build_router(state: AppState, timeout: Duration) -> Router {
    let router = middleware::auth::apply(api::routes(), state.clone()).with_state(state);
    let router = middleware::security_headers::apply(router);
    middleware::http::apply(router, timeout)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        // Without a signal handler we keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
