//! Pending screen - brand header, amount card, and the payment QR.

use gtk4 as gtk;
use gtk4::prelude::*;

use crate::config;
use crate::ui::widgets::qr_image;

/// Create the pending screen shown while no outcome has been recorded.
pub fn create_pending_screen(qr_png: &[u8], amount_rupees: i64) -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.add_css_class("screen");
    root.set_valign(gtk::Align::Center);
    root.set_halign(gtk::Align::Center);

    let title = gtk::Label::new(Some("ArkaShine"));
    title.add_css_class("kiosk-title");

    let subtitle = gtk::Label::new(Some("Deep Tech for Sustainable Agriculture"));
    subtitle.add_css_class("kiosk-subtitle");

    let card = gtk::Box::new(gtk::Orientation::Vertical, 8);
    card.add_css_class("payment-card");
    card.set_halign(gtk::Align::Center);

    let amount_caption = gtk::Label::new(Some("Pay Amount"));
    amount_caption.add_css_class("amount-caption");

    let amount = gtk::Label::new(Some(&format!("\u{20B9} {}", amount_rupees)));
    amount.add_css_class("amount-value");

    let qr = qr_image::qr_picture(qr_png, config::QR_SIZE as i32);
    qr.set_halign(gtk::Align::Center);

    let hint = gtk::Label::new(Some("Scan from another device to pay"));
    hint.add_css_class("hint");

    card.append(&amount_caption);
    card.append(&amount);
    card.append(&qr);
    card.append(&hint);

    root.append(&title);
    root.append(&subtitle);
    root.append(&card);

    root
}
