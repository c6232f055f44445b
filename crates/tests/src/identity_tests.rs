use axum::{routing::get, Router};
use pretty_assertions::assert_eq;
use server::client::UpstreamError;
use shared_types::{IdentityOutcome, Role, Session};

use crate::common;

#[tokio::test]
async fn test_current_user_forwards_cookie_header() {
    let (client, portal) = common::fake_portal().await;
    let cookie = format!("theme=dark; {}", common::SESSION_PAIR);

    let user = client.current_user(Some(&cookie)).await.unwrap();

    assert_eq!(user.role(), Role::Club);
    assert_eq!(user.heading(), "Chess Club");
    let recorded = portal.request_to("/api/user/me/");
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.cookie.as_deref(), Some(cookie.as_str()));
}

#[tokio::test]
async fn test_missing_cookie_is_rejected_with_status() {
    let (client, portal) = common::fake_portal().await;

    let err = client.current_user(None).await.unwrap_err();

    assert_eq!(err, UpstreamError::Status(401));
    assert_eq!(portal.request_to("/api/user/me/").cookie, None);
}

#[tokio::test]
async fn test_rejection_resolves_to_guest_session() {
    let (client, _portal) = common::fake_portal().await;

    let outcome = match client.current_user(Some("access_token=stale")).await {
        Ok(user) => IdentityOutcome::Authenticated(user),
        Err(UpstreamError::Status(status)) => IdentityOutcome::Rejected { status },
        Err(_) => IdentityOutcome::Unreachable,
    };

    assert_eq!(outcome, IdentityOutcome::Rejected { status: 401 });
    assert!(outcome.requires_redirect());
    assert_eq!(Session::resolve(&outcome), Session::guest());
}

#[tokio::test]
async fn test_malformed_identity_body_is_decode_error() {
    let base_url =
        common::spawn(Router::new().route("/api/user/me/", get(|| async { "{\"role\":" }))).await;
    let client = common::client_for(&base_url);

    let err = client.current_user(Some(common::SESSION_PAIR)).await.unwrap_err();

    assert!(matches!(err, UpstreamError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_identity_endpoint_is_network_error() {
    let client = common::client_for(&common::dead_origin().await);

    let err = client.current_user(Some(common::SESSION_PAIR)).await.unwrap_err();

    assert!(matches!(err, UpstreamError::Network(_)), "got {err:?}");
}
