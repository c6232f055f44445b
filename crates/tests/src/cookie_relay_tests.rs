use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware,
    routing::get,
    Extension, Router,
};
use pretty_assertions::assert_eq;
use server::auth::cookies::{CookieSlot, PendingCookieAction};
use server::auth::middleware::cookie_relay_middleware;
use tower::ServiceExt;

async fn sign_in(Extension(slot): Extension<CookieSlot>) -> &'static str {
    slot.push(PendingCookieAction::Relay(
        "access_token=abc123; Domain=api.portal.test; Path=/; HttpOnly".to_string(),
    ));
    "ok"
}

async fn sign_out(Extension(slot): Extension<CookieSlot>) -> &'static str {
    slot.push(PendingCookieAction::Clear("access_token".to_string()));
    "ok"
}

async fn untouched() -> &'static str {
    "ok"
}

fn app() -> Router {
    Router::new()
        .route("/sign-in", get(sign_in))
        .route("/sign-out", get(sign_out))
        .route("/untouched", get(untouched))
        .layer(middleware::from_fn(cookie_relay_middleware))
}

async fn set_cookies(uri: &str) -> (StatusCode, Vec<String>) {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(req).await.expect("Failed to send request");
    let values = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    (response.status(), values)
}

#[tokio::test]
async fn test_relayed_cookie_loses_domain() {
    let (status, cookies) = set_cookies("/sign-in").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("access_token=abc123"));
    assert!(cookies[0].contains("HttpOnly"));
    assert!(!cookies[0].contains("Domain"));
}

#[tokio::test]
async fn test_clear_expires_session_cookie() {
    let (_, cookies) = set_cookies("/sign-out").await;

    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("access_token="));
    assert!(cookies[0].contains("Max-Age=0"));
}

#[tokio::test]
async fn test_no_actions_means_no_set_cookie() {
    let (status, cookies) = set_cookies("/untouched").await;

    assert_eq!(status, StatusCode::OK);
    assert!(cookies.is_empty());
}
