//! Razorpay event payload model and dispatch.

use arkashine_status::StatusRecord;
use serde::Deserialize;

pub const PAYMENT_CAPTURED: &str = "payment.captured";
pub const PAYMENT_LINK_PAID: &str = "payment_link.paid";
pub const PAYMENT_FAILED: &str = "payment.failed";

const DEFAULT_FAILURE_REASON: &str = "payment_failed";
const DEFAULT_FAILURE_DESCRIPTION: &str = "Customer cancelled or timeout";

/// A verified webhook notification, keyed on its `event` field.
#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    pub event: String,
    #[serde(default)]
    pub payload: EventPayload,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub payment: Option<Entity<PaymentEntity>>,
    #[serde(default)]
    pub payment_link: Option<Entity<PaymentLinkEntity>>,
}

/// Razorpay nests every payload object under an `entity` key.
#[derive(Debug, Deserialize)]
pub struct Entity<T> {
    pub entity: T,
}

#[derive(Debug, Default, Deserialize)]
pub struct PaymentEntity {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub error_reason: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PaymentLinkEntity {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Map an event to the record to persist, keyed by payment id.
///
/// Unrecognized event types are stored as `unknown` rather than dropped.
/// Returns None only when the payload carries no usable id at all.
pub fn dispatch(event: &WebhookEvent) -> Option<(String, StatusRecord)> {
    let payment = event.payload.payment.as_ref().map(|e| &e.entity);
    let link = event.payload.payment_link.as_ref().map(|e| &e.entity);

    match event.event.as_str() {
        PAYMENT_CAPTURED | PAYMENT_LINK_PAID => {
            // payment_link.paid delivers both entities; the payment entity
            // carries the pay_* id the kiosk displays.
            if let Some(p) = payment {
                if let Some(id) = p.id.clone() {
                    let record = StatusRecord::success(&id, p.amount, p.currency.clone());
                    return Some((id, record));
                }
            }
            let l = link?;
            let id = l.id.clone()?;
            let record = StatusRecord::success(&id, l.amount, l.currency.clone());
            Some((id, record))
        }

        PAYMENT_FAILED => {
            let p = payment?;
            let id = p.id.clone()?;
            let reason = p
                .error_reason
                .clone()
                .unwrap_or_else(|| DEFAULT_FAILURE_REASON.to_string());
            let description = p
                .error_description
                .clone()
                .unwrap_or_else(|| DEFAULT_FAILURE_DESCRIPTION.to_string());
            let record = StatusRecord::failed(&id, reason, description);
            Some((id, record))
        }

        other => {
            let id = payment
                .and_then(|p| p.id.clone())
                .or_else(|| link.and_then(|l| l.id.clone()))?;
            let record = StatusRecord::unknown(&id, other);
            Some((id, record))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkashine_status::PaymentState;

    fn parse(json: &str) -> WebhookEvent {
        serde_json::from_str(json).expect("valid event JSON")
    }

    #[test]
    fn captured_maps_to_success() {
        let event = parse(
            r#"{
                "event": "payment.captured",
                "payload": { "payment": { "entity": {
                    "id": "pay_123", "amount": 100, "currency": "INR"
                }}}
            }"#,
        );

        let (id, record) = dispatch(&event).unwrap();
        assert_eq!(id, "pay_123");
        assert_eq!(record.state, PaymentState::Success);
        assert_eq!(record.amount, Some(100));
        assert_eq!(record.currency.as_deref(), Some("INR"));
    }

    #[test]
    fn link_paid_prefers_payment_entity() {
        let event = parse(
            r#"{
                "event": "payment_link.paid",
                "payload": {
                    "payment": { "entity": { "id": "pay_9", "amount": 100 }},
                    "payment_link": { "entity": { "id": "plink_1", "amount": 100 }}
                }
            }"#,
        );

        let (id, _) = dispatch(&event).unwrap();
        assert_eq!(id, "pay_9");
    }

    #[test]
    fn link_paid_falls_back_to_link_entity() {
        let event = parse(
            r#"{
                "event": "payment_link.paid",
                "payload": { "payment_link": { "entity": { "id": "plink_1" }}}
            }"#,
        );

        let (id, record) = dispatch(&event).unwrap();
        assert_eq!(id, "plink_1");
        assert_eq!(record.state, PaymentState::Success);
    }

    #[test]
    fn failed_uses_provider_reason() {
        let event = parse(
            r#"{
                "event": "payment.failed",
                "payload": { "payment": { "entity": {
                    "id": "pay_123", "error_reason": "timeout"
                }}}
            }"#,
        );

        let (_, record) = dispatch(&event).unwrap();
        assert_eq!(record.state, PaymentState::Failed);
        assert_eq!(record.reason.as_deref(), Some("timeout"));
    }

    #[test]
    fn failed_defaults_reason_and_description() {
        let event = parse(
            r#"{
                "event": "payment.failed",
                "payload": { "payment": { "entity": { "id": "pay_123" }}}
            }"#,
        );

        let (_, record) = dispatch(&event).unwrap();
        assert_eq!(record.reason.as_deref(), Some("payment_failed"));
        assert_eq!(
            record.description.as_deref(),
            Some("Customer cancelled or timeout")
        );
    }

    #[test]
    fn unrecognized_event_stored_as_unknown() {
        let event = parse(
            r#"{
                "event": "payment.authorized",
                "payload": { "payment": { "entity": { "id": "pay_123" }}}
            }"#,
        );

        let (id, record) = dispatch(&event).unwrap();
        assert_eq!(id, "pay_123");
        assert_eq!(record.state, PaymentState::Unknown);
        assert_eq!(record.description.as_deref(), Some("payment.authorized"));
    }

    #[test]
    fn event_without_id_is_dropped() {
        let event = parse(r#"{ "event": "payment.captured", "payload": {} }"#);
        assert!(dispatch(&event).is_none());
    }
}
