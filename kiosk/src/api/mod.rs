//! HTTP client for the Razorpay API.

pub mod razorpay;

pub use razorpay::{ApiError, PaymentLink, RazorpayClient};
