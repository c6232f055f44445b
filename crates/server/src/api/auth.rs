use dioxus::prelude::*;
use shared_types::{IdentityOutcome, LoginOutcome};

#[cfg(feature = "server")]
use crate::auth::cookies;
#[cfg(feature = "server")]
use crate::client::{PortalClient, UpstreamError};
#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, UpstreamErrorExt, ValidateRequest};

/// Exchange credentials for a session cookie.
///
/// A non-2xx answer from the token endpoint is a normal outcome and comes
/// back as `LoginOutcome::Rejected`; only an unreachable API is an error.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<LoginOutcome, ServerFnError> {
    use shared_types::{LoginRequest, TokenRequest};

    let req = LoginRequest { email, password };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let reply = PortalClient::shared()
        .issue_token(&TokenRequest::from(&req))
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if reply.is_success() {
        cookies::schedule_relay(&reply.set_cookies);
        tracing::info!("Login accepted");
        Ok(LoginOutcome::Accepted)
    } else {
        tracing::info!(status = reply.status, "Login rejected");
        Ok(LoginOutcome::Rejected {
            status: reply.status,
        })
    }
}

/// Invalidate the session upstream and clear the local cookie.
///
/// Always succeeds: an upstream failure is logged and the cookie is
/// cleared anyway.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    let client = PortalClient::shared();
    let session_cookie = client.api().session_cookie.clone();

    let reply = client.logout(cookies::current_cookie_header().as_deref()).await;
    if let Err(e) = &reply {
        tracing::warn!(error = %e, "Logout call failed, clearing session locally");
    }
    cookies::schedule(cookies::logout_actions(&session_cookie, &reply));
    Ok(())
}

/// Ask the API who the caller is.
///
/// Never fails; every failure becomes an [`IdentityOutcome`] variant so the
/// caller can decide whether to redirect.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<IdentityOutcome, ServerFnError> {
    let cookie = cookies::current_cookie_header();
    let outcome = match PortalClient::shared().current_user(cookie.as_deref()).await {
        Ok(user) => IdentityOutcome::Authenticated(user),
        Err(UpstreamError::Status(status)) => {
            tracing::info!(status, "Identity check rejected");
            IdentityOutcome::Rejected { status }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Identity check failed");
            IdentityOutcome::Unreachable
        }
    };
    Ok(outcome)
}
