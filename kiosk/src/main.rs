//! ArkaShine Payment Kiosk - GTK4 payment QR display.
//!
//! Architecture:
//! - `state` module: GTK-free payment state machine (testable)
//! - `app` module: Bridges state machine to GTK and async operations
//! - `api` module: Razorpay payment-link client
//! - `poll` module: Background status-file poller
//! - `qr` module: QR rendering for the payment link
//! - `ui` module: GTK4 widgets and screens

use std::sync::Arc;

use gtk4 as gtk;
use gtk4::prelude::*;
use libadwaita as adw;

mod api;
mod app;
mod config;
mod poll;
mod qr;
mod state;
mod ui;

use app::AppContext;
use arkashine_status::StatusStore;
use ui::{MainWindow, PaymentCard};

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting ArkaShine payment kiosk");

    let cfg = match config::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Create tokio runtime for async operations
    let runtime = Arc::new(
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime"),
    );

    // Create the payment link and QR image before any UI comes up; a
    // kiosk without a scannable code must not start.
    let client = api::RazorpayClient::new(&cfg.key_id, &cfg.key_secret);
    let link = match runtime.block_on(client.create_payment_link(
        cfg.amount_paise(),
        &cfg.currency,
        &cfg.description,
    )) {
        Ok(link) => link,
        Err(e) => {
            log::error!("Failed to create payment link: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Payment link {} -> {}", link.id, link.short_url);

    let qr_png = match qr::render_png(&link.short_url, config::QR_SIZE) {
        Ok(png) => png,
        Err(e) => {
            log::error!("Failed to render QR code: {}", e);
            std::process::exit(1);
        }
    };

    let card = PaymentCard {
        qr_png,
        amount_rupees: cfg.amount_rupees,
    };
    let status_file = cfg.status_file.clone();

    // Create GTK application
    let gtk_app = gtk::Application::builder()
        .application_id("com.arkashine.kiosk")
        .build();

    let runtime_clone = runtime.clone();

    gtk_app.connect_activate(move |gtk_app| {
        adw::init().expect("Failed to initialize libadwaita");

        // Create application context (includes GTK-free state machine)
        let store = StatusStore::new(status_file.clone());
        let (ctx, mut rx) = AppContext::new(runtime_clone.clone(), store);

        // Create main window (GTK layer)
        let main_window = MainWindow::new(gtk_app, ctx.clone(), &card);

        // Poll the tokio channel from the GTK main loop
        let window = main_window.clone();
        glib::timeout_add_local(std::time::Duration::from_millis(16), move || {
            // Process all pending messages
            while let Ok(msg) = rx.try_recv() {
                window.handle_message(msg);
            }
            glib::ControlFlow::Continue
        });

        main_window.window.present();
    });

    // Run the application; a plain window close is a graceful exit.
    gtk_app.run();

    log::info!("Kiosk shutting down");
}
