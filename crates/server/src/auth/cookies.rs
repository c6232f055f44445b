use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

use crate::client::{AuthReply, UpstreamError};

/// The browser's `Cookie` header, with repeated headers joined by `; `.
pub fn incoming_cookie_header(headers: &HeaderMap) -> Option<String> {
    let joined = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join("; ");
    (!joined.is_empty()).then_some(joined)
}

/// Whether the request carries a cookie called `name`.
pub fn has_cookie(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim()).ok())
        .any(|c| c.name() == name)
}

/// Rewrite an upstream `Set-Cookie` so the browser stores it for this origin.
///
/// Drops the `Domain` attribute; everything else is kept. Returns `None` for
/// values that do not parse as a cookie.
pub fn rewrite_set_cookie(raw: &str) -> Option<HeaderValue> {
    let mut parsed = Cookie::parse(raw).ok()?;
    parsed.unset_domain();
    HeaderValue::from_str(&parsed.to_string()).ok()
}

/// Expired `Set-Cookie` that removes `name` from the browser.
pub fn build_clear_cookie(name: &str) -> Option<HeaderValue> {
    let cleared = Cookie::build((name, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();
    HeaderValue::from_str(&cleared.to_string()).ok()
}

/// Cookie change requested by a server function, applied by the middleware.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    /// Forward an upstream `Set-Cookie` value.
    Relay(String),
    /// Expire the named cookie.
    Clear(String),
}

/// Per-request slot for server functions to pass cookie actions to
/// [`cookie_relay_middleware`](super::middleware::cookie_relay_middleware).
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Vec<PendingCookieAction>>>);

impl CookieSlot {
    pub fn push(&self, action: PendingCookieAction) {
        if let Ok(mut pending) = self.0.lock() {
            pending.push(action);
        }
    }

    pub fn take(&self) -> Vec<PendingCookieAction> {
        self.0
            .lock()
            .map(|mut pending| std::mem::take(&mut *pending))
            .unwrap_or_default()
    }

    /// Append the pending actions to `headers` in the order they were scheduled.
    pub fn apply(&self, headers: &mut HeaderMap) {
        for action in self.take() {
            let value = match &action {
                PendingCookieAction::Relay(raw) => rewrite_set_cookie(raw),
                PendingCookieAction::Clear(name) => build_clear_cookie(name),
            };
            match value {
                Some(v) => {
                    headers.append(header::SET_COOKIE, v);
                }
                None => tracing::warn!(?action, "Dropping unusable Set-Cookie"),
            }
        }
    }
}

/// Request headers of the server function currently running.
pub fn current_request_headers() -> Option<HeaderMap> {
    dioxus::fullstack::FullstackContext::current().map(|ctx| ctx.parts_mut().headers.clone())
}

/// The caller's `Cookie` header, for forwarding upstream.
pub fn current_cookie_header() -> Option<String> {
    current_request_headers().and_then(|headers| incoming_cookie_header(&headers))
}

/// Schedule cookie actions for the current response.
/// No-op outside a request handled by the relay middleware.
pub fn schedule(actions: impl IntoIterator<Item = PendingCookieAction>) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            for action in actions {
                slot.push(action);
            }
        }
    }
}

/// Relay each upstream `Set-Cookie` value to the browser.
pub fn schedule_relay(set_cookies: &[String]) {
    schedule(set_cookies.iter().cloned().map(PendingCookieAction::Relay));
}

/// Cookie actions that follow a logout call.
///
/// The session cookie is cleared whatever the API answered; upstream
/// `Set-Cookie` values are relayed only when the call got through.
pub fn logout_actions(
    session_cookie: &str,
    reply: &Result<AuthReply, UpstreamError>,
) -> Vec<PendingCookieAction> {
    let mut actions = vec![PendingCookieAction::Clear(session_cookie.to_string())];
    if let Ok(reply) = reply {
        actions.extend(reply.set_cookies.iter().cloned().map(PendingCookieAction::Relay));
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn headers_with(cookies: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for c in cookies {
            headers.append(header::COOKIE, HeaderValue::from_str(c).unwrap());
        }
        headers
    }

    #[test]
    fn incoming_header_passes_through_single_value() {
        let headers = headers_with(&["access_token=abc; theme=dark"]);
        assert_eq!(
            incoming_cookie_header(&headers).as_deref(),
            Some("access_token=abc; theme=dark")
        );
    }

    #[test]
    fn incoming_header_joins_repeated_values() {
        let headers = headers_with(&["a=1", "b=2"]);
        assert_eq!(incoming_cookie_header(&headers).as_deref(), Some("a=1; b=2"));
        assert_eq!(incoming_cookie_header(&HeaderMap::new()), None);
    }

    #[test]
    fn has_cookie_matches_by_name() {
        let headers = headers_with(&["theme=dark; access_token=abc"]);
        assert!(has_cookie(&headers, "access_token"));
        assert!(!has_cookie(&headers, "refresh_token"));
    }

    #[test]
    fn rewrite_drops_domain_keeps_attributes() {
        let value = rewrite_set_cookie(
            "access_token=xyz; Domain=api.portal.edu; Path=/; HttpOnly; SameSite=Lax",
        )
        .unwrap();
        let text = value.to_str().unwrap();
        assert!(text.starts_with("access_token=xyz"));
        assert!(text.contains("HttpOnly"));
        assert!(!text.contains("Domain"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let value = build_clear_cookie("access_token").unwrap();
        let text = value.to_str().unwrap();
        assert!(text.starts_with("access_token="));
        assert!(text.contains("Max-Age=0"));
    }

    #[test]
    fn slot_applies_actions_in_order_and_empties() {
        let slot = CookieSlot::default();
        slot.push(PendingCookieAction::Clear("access_token".into()));
        slot.push(PendingCookieAction::Relay("session=1; Path=/".into()));

        let mut headers = HeaderMap::new();
        slot.apply(&mut headers);
        let values: Vec<&str> = headers
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(values.len(), 2);
        assert!(values[0].starts_with("access_token="));
        assert!(values[1].starts_with("session=1"));
        assert!(slot.take().is_empty());
    }

    #[test]
    fn logout_clears_session_even_when_api_is_down() {
        let actions = logout_actions(
            "access_token",
            &Err(UpstreamError::Network("connection refused".into())),
        );
        assert_eq!(actions, vec![PendingCookieAction::Clear("access_token".into())]);
    }

    #[test]
    fn logout_relays_upstream_cookies_after_clearing() {
        let reply = AuthReply {
            status: 200,
            set_cookies: vec!["refresh_token=; Max-Age=0; Path=/".into()],
        };
        let actions = logout_actions("access_token", &Ok(reply));
        assert_eq!(
            actions,
            vec![
                PendingCookieAction::Clear("access_token".into()),
                PendingCookieAction::Relay("refresh_token=; Max-Age=0; Path=/".into()),
            ]
        );
    }

    #[test]
    fn logout_rejected_upstream_still_clears() {
        let reply = AuthReply {
            status: 401,
            set_cookies: vec![],
        };
        let actions = logout_actions("access_token", &Ok(reply));
        assert_eq!(actions, vec![PendingCookieAction::Clear("access_token".into())]);
    }
}
