//! Environment-driven configuration for the webhook receiver.

use std::env;
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_STATUS_FILE: &str = "payment_status.json";

/// Development fallback, matching the provider dashboard default setup.
const DEFAULT_SECRET: &str = "arkashine_webhook_secret";

#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret configured in the Razorpay webhook dashboard.
    pub secret: String,
    pub port: u16,
    /// Path of the status file shared with the kiosk process.
    pub status_file: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let secret = match env::var("WEBHOOK_SECRET") {
            Ok(s) if !s.is_empty() => s,
            _ => {
                log::warn!("WEBHOOK_SECRET not set, using the development secret");
                DEFAULT_SECRET.to_string()
            }
        };

        let port = match env::var("WEBHOOK_PORT") {
            Ok(p) => p.parse().context("invalid WEBHOOK_PORT")?,
            Err(_) => DEFAULT_PORT,
        };

        let status_file = env::var("STATUS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATUS_FILE));

        Ok(Self {
            secret,
            port,
            status_file,
        })
    }
}
