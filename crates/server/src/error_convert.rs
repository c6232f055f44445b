use dioxus::prelude::ServerFnError;
use shared_types::AppError;

use crate::client::UpstreamError;

/// Map an upstream failure onto the shared error model.
pub fn upstream_to_app_error(err: UpstreamError) -> AppError {
    match err {
        UpstreamError::Network(_) => AppError::network("Network error, please try again."),
        UpstreamError::Status(401) => AppError::unauthorized("Please log in again."),
        UpstreamError::Status(403) => AppError::forbidden("You do not have access to this page."),
        UpstreamError::Status(status) => {
            AppError::upstream(format!("The portal returned an error (status {status})."))
        }
        UpstreamError::Decode(_) => AppError::upstream("The portal sent an unreadable response."),
    }
}

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_app_error()` on UpstreamError.
pub trait UpstreamErrorExt {
    fn into_app_error(self) -> AppError;
}

impl UpstreamErrorExt for UpstreamError {
    fn into_app_error(self) -> AppError {
        tracing::warn!(error = %self, "Upstream call failed");
        upstream_to_app_error(self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
