//! Configuration for the ArkaShine kiosk.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Razorpay REST API root
pub const RAZORPAY_API_BASE: &str = "https://api.razorpay.com/v1";

/// Status file poll cadence in milliseconds
pub const POLL_INTERVAL_MS: u64 = 2000;

/// Rendered QR code size in pixels
pub const QR_SIZE: u32 = 300;

/// Kiosk window size
pub const WINDOW_WIDTH: i32 = 520;
pub const WINDOW_HEIGHT: i32 = 720;

const DEFAULT_AMOUNT_RS: i64 = 1;
const DEFAULT_CURRENCY: &str = "INR";
const DEFAULT_DESCRIPTION: &str = "ArkaShine - Sustainable Agri Tech";
const DEFAULT_STATUS_FILE: &str = "payment_status.json";

/// Build the payment-links API URL
pub fn payment_links_url() -> String {
    format!("{}/payment_links", RAZORPAY_API_BASE)
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{0} is not a valid number")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub key_id: String,
    pub key_secret: String,
    /// Display amount in whole rupees.
    pub amount_rupees: i64,
    pub currency: String,
    pub description: String,
    /// Path of the status file written by the webhook receiver.
    pub status_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let key_id = require("RAZORPAY_KEY_ID")?;
        let key_secret = require("RAZORPAY_KEY_SECRET")?;

        let amount_rupees = match env::var("PAYMENT_AMOUNT_RS") {
            Ok(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid("PAYMENT_AMOUNT_RS"))?,
            Err(_) => DEFAULT_AMOUNT_RS,
        };

        let currency = env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY.into());
        let description =
            env::var("PAYMENT_DESCRIPTION").unwrap_or_else(|_| DEFAULT_DESCRIPTION.into());
        let status_file = env::var("STATUS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATUS_FILE));

        Ok(Self {
            key_id,
            key_secret,
            amount_rupees,
            currency,
            description,
            status_file,
        })
    }

    /// Amount in the provider's minor units (paise for INR).
    pub fn amount_paise(&self) -> i64 {
        self.amount_rupees * 100
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_converts_to_paise() {
        let config = Config {
            key_id: "rzp_test".into(),
            key_secret: "secret".into(),
            amount_rupees: 25,
            currency: "INR".into(),
            description: "test".into(),
            status_file: PathBuf::from("payment_status.json"),
        };
        assert_eq!(config.amount_paise(), 2500);
    }

    #[test]
    fn payment_links_url_is_rooted() {
        assert_eq!(
            payment_links_url(),
            "https://api.razorpay.com/v1/payment_links"
        );
    }
}
