use super::*;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::services::auth::RemoteAuthValidator;
use crate::services::auth::factory::auth_http_client;

fn full_app(server: &MockServer) -> Router {
    let base = Url::parse(&server.uri()).unwrap();
    let validator = RemoteAuthValidator::new(reqwest::Client::new(), &base).unwrap();
    let state = AppState::new(Arc::new(validator), RoutePolicy::default(), false);
    build_router(state, Duration::from_secs(5))
}

#[test]
fn default_log_filter_is_valid() {
    assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
}

#[test]
fn panic_message_reads_str_and_string_payloads() {
    let literal: Box<dyn Any + Send> = Box::new("boom");
    let owned: Box<dyn Any + Send> = Box::new(String::from("bad state"));
    let other: Box<dyn Any + Send> = Box::new(42_u8);

    assert_eq!(panic_message(literal.as_ref()), "boom");
    assert_eq!(panic_message(owned.as_ref()), "bad state");
    assert_eq!(panic_message(other.as_ref()), "non-string panic payload");
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let server = MockServer::start().await;
    let res = full_app(&server)
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let headers = res.headers();
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["referrer-policy"], "same-origin");
    assert_eq!(headers[header::CACHE_CONTROL], "no-store");
}

#[tokio::test]
async fn request_id_is_generated_and_echoed() {
    let server = MockServer::start().await;
    let app = full_app(&server);

    let res = app
        .clone()
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let generated = res.headers()["x-request-id"].to_str().unwrap();
    assert!(!generated.is_empty());

    let res = app
        .oneshot(
            Request::get("/api/health")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn redirect_passes_through_full_stack() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/auth/check"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let res = full_app(&server)
        .oneshot(
            Request::get("/dashboard")
                .header(header::COOKIE, "accessToken=expired")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()[header::LOCATION], "/login");
    assert!(res.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn slow_auth_service_redirects_before_global_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/auth/check"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": 7}))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let base = Url::parse(&server.uri()).unwrap();
    let client = auth_http_client(Duration::from_millis(100)).unwrap();
    let validator = RemoteAuthValidator::new(client, &base).unwrap();
    let state = AppState::new(Arc::new(validator), RoutePolicy::default(), false);
    let app = build_router(state, Duration::from_secs(1));

    let res = app
        .oneshot(
            Request::get("/dashboard")
                .header(header::COOKIE, "accessToken=abc123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()[header::LOCATION], "/login");
}
