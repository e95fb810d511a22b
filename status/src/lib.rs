//! File-backed payment status store shared between the webhook receiver
//! and the kiosk display process.
//!
//! The store is a single JSON object mapping payment id to status record.
//! The webhook receiver is the only writer; the kiosk only reads. Writes
//! go through a temp-file-then-rename so a concurrent reader never sees a
//! partially written file.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("status file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("status serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of a payment attempt as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentState {
    Pending,
    Success,
    Failed,
    Unknown,
}

impl PaymentState {
    /// `success` and `failed` are terminal: later events for the same
    /// payment id must not overwrite them.
    pub fn is_terminal(self) -> bool {
        matches!(self, PaymentState::Success | PaymentState::Failed)
    }
}

/// One payment attempt's status, keyed in the store by payment id.
///
/// All fields other than `state` are optional; consumers must tolerate
/// absent keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub state: PaymentState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Amount in the provider's minor units (paise for INR).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StatusRecord {
    pub fn success(payment_id: &str, amount: Option<i64>, currency: Option<String>) -> Self {
        Self {
            state: PaymentState::Success,
            payment_id: Some(payment_id.to_string()),
            amount,
            currency,
            reason: None,
            description: None,
        }
    }

    pub fn failed(payment_id: &str, reason: String, description: String) -> Self {
        Self {
            state: PaymentState::Failed,
            payment_id: Some(payment_id.to_string()),
            amount: None,
            currency: None,
            reason: Some(reason),
            description: Some(description),
        }
    }

    /// Record for an event type we don't handle, kept for observability.
    pub fn unknown(payment_id: &str, event: &str) -> Self {
        Self {
            state: PaymentState::Unknown,
            payment_id: Some(payment_id.to_string()),
            amount: None,
            currency: None,
            reason: None,
            description: Some(event.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}

/// The record a single-payment kiosk should act on: the first terminal
/// record if any, otherwise the first record.
pub fn active_record(map: &BTreeMap<String, StatusRecord>) -> Option<&StatusRecord> {
    map.values()
        .find(|r| r.is_terminal())
        .or_else(|| map.values().next())
}

/// Handle to the shared status file.
#[derive(Debug, Clone)]
pub struct StatusStore {
    path: PathBuf,
}

impl StatusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full status map. A missing, unreadable, or corrupt file
    /// yields an empty map; readers treat "no data yet" and "bad data"
    /// the same way and never fail.
    pub fn load(&self) -> BTreeMap<String, StatusRecord> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                log::warn!("Failed to read {}: {}", self.path.display(), e);
                return BTreeMap::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(map) => map,
            Err(e) => {
                log::warn!("Corrupt status file {}: {}", self.path.display(), e);
                BTreeMap::new()
            }
        }
    }

    /// Persist a record for `payment_id` via read-modify-write of the
    /// whole map.
    ///
    /// Skips the write (returning Ok) when the id is empty or when the
    /// existing record for that id is terminal. The file is replaced
    /// atomically: serialize to a sibling temp file, then rename.
    pub fn save(&self, payment_id: &str, record: StatusRecord) -> Result<(), StoreError> {
        if payment_id.is_empty() {
            log::warn!("Skipping save: empty payment id");
            return Ok(());
        }

        let mut map = self.load();
        if let Some(existing) = map.get(payment_id) {
            if existing.is_terminal() {
                log::info!("Final state already recorded for {}, skipping", payment_id);
                return Ok(());
            }
        }
        map.insert(payment_id.to_string(), record);

        let bytes = serde_json::to_vec_pretty(&map)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("Status saved for {}", payment_id);
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}
