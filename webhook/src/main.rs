//! Webhook receiver binary: binds the HTTP endpoint and serves forever.
//!
//! Runs as a separate process from the kiosk; the status file is the only
//! channel between the two.

use std::net::SocketAddr;

use arkashine_status::StatusStore;
use arkashine_webhook::config::Config;
use arkashine_webhook::routes::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    log::info!(
        "Starting webhook receiver, status file {}",
        config.status_file.display()
    );

    let state = AppState {
        secret: config.secret.clone(),
        store: StatusStore::new(config.status_file.clone()),
    };
    let app = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
