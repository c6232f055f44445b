use pretty_assertions::assert_eq;
use server::auth::cookies::{logout_actions, PendingCookieAction};
use server::client::UpstreamError;
use shared_types::{LoginRequest, TokenRequest};

use crate::common;

fn token_request(email: &str, password: &str) -> TokenRequest {
    TokenRequest::from(&LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
async fn test_token_request_is_form_encoded() {
    let (client, portal) = common::fake_portal().await;

    client
        .issue_token(&token_request(common::VALID_EMAIL, common::VALID_PASSWORD))
        .await
        .unwrap();

    let recorded = portal.request_to("/api/auth/token/");
    assert_eq!(recorded.method, "POST");
    assert_eq!(
        recorded.content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(recorded.form.get("username").map(String::as_str), Some(common::VALID_EMAIL));
    assert_eq!(
        recorded.form.get("password").map(String::as_str),
        Some(common::VALID_PASSWORD)
    );
    assert!(!recorded.form.contains_key("email"));
}

#[tokio::test]
async fn test_accepted_login_returns_every_set_cookie() {
    let (client, _portal) = common::fake_portal().await;

    let reply = client
        .issue_token(&token_request(common::VALID_EMAIL, common::VALID_PASSWORD))
        .await
        .unwrap();

    assert_eq!(reply.status, 200);
    assert!(reply.is_success());
    assert_eq!(reply.set_cookies.len(), 2);
    assert!(reply.set_cookies[0].starts_with(common::SESSION_PAIR));
    assert!(reply.set_cookies[1].starts_with("refresh_token=r1"));
}

#[tokio::test]
async fn test_rejected_login_passes_status_through() {
    let (client, _portal) = common::fake_portal().await;

    let reply = client
        .issue_token(&token_request(common::VALID_EMAIL, "wrong-password"))
        .await
        .unwrap();

    assert_eq!(reply.status, 401);
    assert!(!reply.is_success());
    assert!(reply.set_cookies.is_empty());
}

#[tokio::test]
async fn test_unreachable_token_endpoint_is_network_error() {
    let client = common::client_for(&common::dead_origin().await);

    let err = client
        .issue_token(&token_request(common::VALID_EMAIL, common::VALID_PASSWORD))
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn test_logout_forwards_cookie_and_relays_expiry() {
    let (client, portal) = common::fake_portal().await;

    let reply = client.logout(Some(common::SESSION_PAIR)).await.unwrap();

    assert!(reply.is_success());
    assert_eq!(reply.set_cookies, vec!["access_token=; Max-Age=0; Path=/".to_string()]);
    let recorded = portal.request_to("/api/auth/logout/");
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.cookie.as_deref(), Some(common::SESSION_PAIR));
}

#[tokio::test]
async fn test_logout_with_api_down_still_clears_session_cookie() {
    let client = common::client_for(&common::dead_origin().await);

    let reply = client.logout(Some(common::SESSION_PAIR)).await;

    assert!(
        matches!(reply, Err(UpstreamError::Network(_))),
        "got {reply:?}"
    );
    assert_eq!(
        logout_actions("access_token", &reply),
        vec![PendingCookieAction::Clear("access_token".to_string())]
    );
}

#[tokio::test]
async fn test_logout_actions_clear_then_relay_upstream_expiry() {
    let (client, _portal) = common::fake_portal().await;

    let reply = client.logout(Some(common::SESSION_PAIR)).await;
    let actions = logout_actions("access_token", &reply);

    assert_eq!(
        actions,
        vec![
            PendingCookieAction::Clear("access_token".to_string()),
            PendingCookieAction::Relay("access_token=; Max-Age=0; Path=/".to_string()),
        ]
    );
}
