use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared_types::{ApiConfig, CurrentUser, TokenRequest, UserRecord};
use std::sync::OnceLock;
use std::time::Duration;

const TOKEN_PATH: &str = "/api/auth/token/";
const LOGOUT_PATH: &str = "/api/auth/logout/";
const CURRENT_USER_PATH: &str = "/api/user/me/";
const USERS_PATH: &str = "/api/users/";

static SHARED: OnceLock<PortalClient> = OnceLock::new();

/// Failure talking to the Competition Portal API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpstreamError {
    #[error("Competition Portal API unreachable: {0}")]
    Network(String),
    #[error("Competition Portal API returned status {0}")]
    Status(u16),
    #[error("Unreadable response from Competition Portal API: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            UpstreamError::Decode(err.to_string())
        } else {
            UpstreamError::Network(err.to_string())
        }
    }
}

/// Status and cookies of an auth call. Non-2xx statuses are returned, not raised.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthReply {
    pub status: u16,
    pub set_cookies: Vec<String>,
}

impl AuthReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client for the Competition Portal API.
///
/// Every call takes the browser's raw `Cookie` header and forwards it
/// unchanged; the API owns the session.
#[derive(Debug, Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    api: ApiConfig,
}

impl PortalClient {
    pub fn new(api: ApiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self { http, api }
    }

    /// Process-wide client built from the loaded config.
    pub fn shared() -> &'static PortalClient {
        SHARED.get_or_init(|| PortalClient::new(crate::config::portal_config().api.clone()))
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    fn with_cookie(builder: RequestBuilder, cookie: Option<&str>) -> RequestBuilder {
        match cookie {
            Some(value) if !value.is_empty() => builder.header(COOKIE, value),
            _ => builder,
        }
    }

    fn set_cookies(response: &Response) -> Vec<String> {
        response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| UpstreamError::Decode(e.to_string()))
    }

    /// `POST /api/auth/token/` with a form-encoded `username`/`password`.
    #[tracing::instrument(skip(self, request), fields(username = %request.username))]
    pub async fn issue_token(&self, request: &TokenRequest) -> Result<AuthReply, UpstreamError> {
        let response = self
            .http
            .post(self.api.endpoint(TOKEN_PATH))
            .form(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Token request failed");
                UpstreamError::from(e)
            })?;

        let reply = AuthReply {
            status: response.status().as_u16(),
            set_cookies: Self::set_cookies(&response),
        };
        tracing::info!(status = reply.status, cookies = reply.set_cookies.len(), "Token endpoint answered");
        Ok(reply)
    }

    /// `POST /api/auth/logout/` with the caller's cookies.
    #[tracing::instrument(skip_all)]
    pub async fn logout(&self, cookie: Option<&str>) -> Result<AuthReply, UpstreamError> {
        let request = self.http.post(self.api.endpoint(LOGOUT_PATH));
        let response = Self::with_cookie(request, cookie).send().await?;
        let reply = AuthReply {
            status: response.status().as_u16(),
            set_cookies: Self::set_cookies(&response),
        };
        if !reply.is_success() {
            tracing::warn!(status = reply.status, "Logout rejected upstream");
        }
        Ok(reply)
    }

    /// `GET /api/user/me/`.
    #[tracing::instrument(skip_all)]
    pub async fn current_user(&self, cookie: Option<&str>) -> Result<CurrentUser, UpstreamError> {
        let request = self.http.get(self.api.endpoint(CURRENT_USER_PATH));
        let response = Self::with_cookie(request, cookie).send().await?;
        Self::read_json(response).await
    }

    /// `GET /api/users/`.
    #[tracing::instrument(skip_all)]
    pub async fn list_users(&self, cookie: Option<&str>) -> Result<Vec<UserRecord>, UpstreamError> {
        let request = self.http.get(self.api.endpoint(USERS_PATH));
        let response = Self::with_cookie(request, cookie).send().await?;
        Self::read_json(response).await
    }

    /// Whether the API answers at all. Any HTTP status counts as reachable.
    pub async fn ping(&self) -> Result<u16, UpstreamError> {
        let response = self.http.get(self.api.endpoint("/")).send().await?;
        Ok(response.status().as_u16())
    }
}
