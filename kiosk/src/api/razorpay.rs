//! Razorpay payment-link client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Server error: {0}")]
    Server(String),
}

/// A hosted checkout link; `short_url` is what the QR code encodes.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentLink {
    pub id: String,
    pub short_url: String,
}

#[derive(Debug, Serialize)]
struct CreateLinkRequest<'a> {
    amount: i64,
    currency: &'a str,
    accept_partial: bool,
    description: &'a str,
}

/// HTTP client for the Razorpay payment-links API
#[derive(Clone)]
pub struct RazorpayClient {
    client: reqwest::Client,
    key_id: String,
    key_secret: String,
}

impl RazorpayClient {
    pub fn new(key_id: &str, key_secret: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            key_id: key_id.to_string(),
            key_secret: key_secret.to_string(),
        }
    }

    /// Create a payment link for a single full payment.
    /// `amount` is in the provider's minor units.
    pub async fn create_payment_link(
        &self,
        amount: i64,
        currency: &str,
        description: &str,
    ) -> Result<PaymentLink, ApiError> {
        let url = config::payment_links_url();
        log::info!("Creating payment link at {}", url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&CreateLinkRequest {
                amount,
                currency,
                accept_partial: false,
                description,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Server(format!("{}: {}", status, body)));
        }

        let link: PaymentLink = response.json().await?;
        log::info!("Created payment link {}", link.id);
        Ok(link)
    }
}
