use axum::{routing::get, Router};
use pretty_assertions::assert_eq;
use server::client::UpstreamError;
use shared_types::Role;

use crate::common;

#[tokio::test]
async fn test_list_users_forwards_cookie_and_parses_rows() {
    let (client, portal) = common::fake_portal().await;

    let users = client.list_users(Some(common::SESSION_PAIR)).await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].uuid, "1");
    assert_eq!(users[0].university_id.as_deref(), Some("20231234"));
    assert_eq!(users[0].role_kind(), Role::Admin);
    assert!(users[0].created_at.is_some());
    assert_eq!(users[1].uuid, "2");
    assert_eq!(users[1].university_id, None);

    let recorded = portal.request_to("/api/users/");
    assert_eq!(recorded.cookie.as_deref(), Some(common::SESSION_PAIR));
}

#[tokio::test]
async fn test_list_users_non_admin_is_status_error() {
    let (client, _portal) = common::fake_portal().await;

    let err = client.list_users(None).await.unwrap_err();

    assert_eq!(err, UpstreamError::Status(403));
}

#[tokio::test]
async fn test_list_users_malformed_body_is_decode_error() {
    let base_url =
        common::spawn(Router::new().route("/api/users/", get(|| async { "not json" }))).await;
    let client = common::client_for(&base_url);

    let err = client.list_users(Some(common::SESSION_PAIR)).await.unwrap_err();

    assert!(matches!(err, UpstreamError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_list_users_empty_array() {
    let base_url =
        common::spawn(Router::new().route("/api/users/", get(|| async { "[]" }))).await;
    let client = common::client_for(&base_url);

    let users = client.list_users(None).await.unwrap();

    assert!(users.is_empty());
}
