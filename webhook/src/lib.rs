//! Razorpay webhook receiver for the ArkaShine payment kiosk.
//!
//! One signed POST endpoint: verify the `X-Razorpay-Signature` HMAC over
//! the raw body, map the event to a status record, and persist it to the
//! shared status file the kiosk polls.

pub mod config;
pub mod error;
pub mod event;
pub mod routes;
pub mod signature;
