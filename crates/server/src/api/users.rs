use dioxus::prelude::*;
use shared_types::UserRecord;

#[cfg(feature = "server")]
use crate::auth::cookies;
#[cfg(feature = "server")]
use crate::client::PortalClient;
#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, UpstreamErrorExt};

/// Every user account, in API order. The caller's cookies are forwarded so
/// the API can apply its own admin check.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_users() -> Result<Vec<UserRecord>, ServerFnError> {
    let cookie = cookies::current_cookie_header();
    let users = PortalClient::shared()
        .list_users(cookie.as_deref())
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    tracing::info!(count = users.len(), "Listed users");
    Ok(users)
}
