use axum::{
    extract::{Form, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{AppendHeaders, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use server::client::PortalClient;
use shared_types::ApiConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const VALID_EMAIL: &str = "user@test.com";
pub const VALID_PASSWORD: &str = "12345678";
/// Cookie pair the fake API issues on a successful token request.
pub const SESSION_PAIR: &str = "access_token=abc123";

/// One request as seen by the fake API.
#[derive(Debug, Clone, Default)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub cookie: Option<String>,
    pub content_type: Option<String>,
    pub form: HashMap<String, String>,
}

/// In-process stand-in for the Competition Portal API.
#[derive(Clone, Default)]
pub struct FakePortal {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakePortal {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// The single recorded request to `path`.
    pub fn request_to(&self, path: &str) -> Recorded {
        let matching: Vec<Recorded> = self
            .requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect();
        assert_eq!(matching.len(), 1, "expected one request to {path}");
        matching[0].clone()
    }

    fn record(&self, method: &Method, uri: &Uri, headers: &HeaderMap, form: HashMap<String, String>) {
        let text = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        self.requests.lock().unwrap().push(Recorded {
            method: method.to_string(),
            path: uri.path().to_string(),
            cookie: text(header::COOKIE),
            content_type: text(header::CONTENT_TYPE),
            form,
        });
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/auth/token/", post(issue_token))
            .route("/api/auth/logout/", post(logout))
            .route("/api/user/me/", get(current_user))
            .route("/api/users/", get(list_users))
            .with_state(self.clone())
    }
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains(SESSION_PAIR))
}

async fn issue_token(
    State(portal): State<FakePortal>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    portal.record(&method, &uri, &headers, form.clone());

    let accepted = form.get("username").map(String::as_str) == Some(VALID_EMAIL)
        && form.get("password").map(String::as_str) == Some(VALID_PASSWORD);
    if accepted {
        (
            StatusCode::OK,
            AppendHeaders([
                (
                    header::SET_COOKIE,
                    format!("{SESSION_PAIR}; Domain=api.portal.test; Path=/; HttpOnly"),
                ),
                (
                    header::SET_COOKIE,
                    "refresh_token=r1; Domain=api.portal.test; Path=/; HttpOnly".to_string(),
                ),
            ]),
            Json(json!({ "detail": "ok" })),
        )
            .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "No active account found with the given credentials" })),
        )
            .into_response()
    }
}

async fn logout(
    State(portal): State<FakePortal>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    portal.record(&method, &uri, &headers, HashMap::new());
    (
        StatusCode::OK,
        [(header::SET_COOKIE, "access_token=; Max-Age=0; Path=/")],
    )
        .into_response()
}

async fn current_user(
    State(portal): State<FakePortal>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    portal.record(&method, &uri, &headers, HashMap::new());
    if !has_session(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Not authenticated" })))
            .into_response();
    }
    Json(json!({
        "role": "club",
        "club": { "name": "Chess Club" },
        "name": "Chess Club Admin",
        "email": "chess@uni.edu"
    }))
    .into_response()
}

async fn list_users(
    State(portal): State<FakePortal>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    portal.record(&method, &uri, &headers, HashMap::new());
    if !has_session(&headers) {
        return (StatusCode::FORBIDDEN, Json(json!({ "detail": "Admins only" }))).into_response();
    }
    Json(json!([
        {
            "uuid": "1",
            "name": "Ada",
            "email": "ada@uni.edu",
            "university_id": "20231234",
            "role": "admin",
            "created_at": "2024-01-05T10:00:00Z"
        },
        {
            "id": "2",
            "name": "Grace",
            "email": "grace@uni.edu",
            "university_id": null,
            "role": "regular"
        }
    ]))
    .into_response()
}

/// Serve `router` on an ephemeral local port and return its origin.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake portal");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

pub fn client_for(base_url: &str) -> PortalClient {
    PortalClient::new(ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..ApiConfig::default()
    })
}

/// A running fake API and a client pointed at it.
pub async fn fake_portal() -> (PortalClient, FakePortal) {
    let portal = FakePortal::default();
    let base_url = spawn(portal.router()).await;
    (client_for(&base_url), portal)
}

/// Origin nothing is listening on.
pub async fn dead_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{addr}")
}
