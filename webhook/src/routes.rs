//! HTTP routes for the webhook receiver.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use arkashine_status::StatusStore;

use crate::error::WebhookError;
use crate::event::{self, WebhookEvent};
use crate::signature;

pub const SIGNATURE_HEADER: &str = "X-Razorpay-Signature";

#[derive(Clone)]
pub struct AppState {
    pub secret: String,
    pub store: StatusStore,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/webhook", get(liveness).post(handle_webhook))
        .with_state(state)
}

async fn home() -> &'static str {
    "Razorpay Webhook Server Running"
}

async fn liveness() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Verify, parse, and persist one provider notification.
///
/// Responds 200 whenever the signature and JSON check out, even if the
/// event type is unhandled or the store write fails; the provider only
/// needs delivery acknowledgment.
async fn handle_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<serde_json::Value>, WebhookError> {
    let provided = match headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) {
        Some(s) => s,
        None => {
            log::error!("Missing signature header");
            return Err(WebhookError::InvalidSignature);
        }
    };

    if !signature::verify(&body, provided, &state.secret) {
        log::error!("Signature mismatch");
        return Err(WebhookError::InvalidSignature);
    }

    let webhook_event: WebhookEvent = serde_json::from_slice(&body).map_err(|e| {
        log::error!("JSON parse failed: {}", e);
        WebhookError::InvalidPayload
    })?;

    match event::dispatch(&webhook_event) {
        Some((payment_id, record)) => {
            log::info!(
                "Event {} -> {:?} for {}",
                webhook_event.event,
                record.state,
                payment_id
            );
            if let Err(e) = state.store.save(&payment_id, record) {
                // Acknowledged anyway; storage trouble stays local.
                log::error!("Failed to persist status for {}: {}", payment_id, e);
            }
        }
        None => {
            log::warn!("Event {} carried no payment id, ignored", webhook_event.event);
        }
    }

    Ok(Json(json!({ "status": "processed" })))
}
