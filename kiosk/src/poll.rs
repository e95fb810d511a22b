//! Background status-file poller.
//!
//! Reads the shared status file on a fixed interval and reports the
//! active record through a callback, keeping file I/O off the GTK render
//! tick. The webhook receiver process is the only writer; a torn or
//! half-written file simply reads as "no data yet".

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use arkashine_status::{active_record, StatusRecord, StatusStore};

/// Handle for stopping the poll task
pub struct PollHandle {
    shutdown_tx: mpsc::Sender<()>,
}

impl PollHandle {
    /// Stop the poll task
    pub async fn close(&self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

/// Spawn the poll task and invoke `callback` after every read.
/// The callback runs on the tokio runtime; use a channel to hand records
/// to the GTK side.
pub fn watch<F>(
    runtime: Arc<tokio::runtime::Runtime>,
    store: StatusStore,
    interval: Duration,
    callback: F,
) -> PollHandle
where
    F: Fn(Option<StatusRecord>) + Send + Sync + 'static,
{
    let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

    runtime.spawn(async move {
        log::info!(
            "Polling {} every {}ms",
            store.path().display(),
            interval.as_millis()
        );

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    log::info!("Status poll stopped");
                    return;
                }
                _ = tokio::time::sleep(interval) => {
                    let map = store.load();
                    callback(active_record(&map).cloned());
                }
            }
        }
    });

    PollHandle { shutdown_tx }
}
