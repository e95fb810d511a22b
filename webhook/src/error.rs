//! Webhook request errors surfaced to the provider.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Rejections for an inbound webhook POST. Both map to 400; the provider
/// retries failed deliveries on its own schedule.
#[derive(Error, Debug)]
pub enum WebhookError {
    /// Signature header missing, malformed, or not matching the body.
    #[error("Invalid signature")]
    InvalidSignature,
    /// Body passed verification but is not valid JSON.
    #[error("Invalid JSON")]
    InvalidPayload,
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
