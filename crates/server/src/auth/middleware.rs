use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::CookieSlot;

/// Gives server functions a [`CookieSlot`] and writes whatever they schedule
/// onto the response as `Set-Cookie` headers.
///
/// Never rejects a request; authorization is the Competition Portal API's job.
pub async fn cookie_relay_middleware(mut req: Request, next: Next) -> Response {
    let slot = CookieSlot::default();
    req.extensions_mut().insert(slot.clone());

    let mut response = next.run(req).await;
    slot.apply(response.headers_mut());
    response
}
