//! Terminal result screens for success and failure.

use gtk4 as gtk;
use gtk4::prelude::*;

/// Success screen; the payment id label is filled in on transition.
pub struct SuccessScreen {
    pub root: gtk::Box,
    payment_id: gtk::Label,
}

impl SuccessScreen {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
        root.add_css_class("screen");
        root.set_valign(gtk::Align::Center);
        root.set_halign(gtk::Align::Center);

        let title = gtk::Label::new(Some("Payment Successful"));
        title.add_css_class("success-title");

        let caption = gtk::Label::new(Some("Payment ID"));
        caption.add_css_class("result-caption");

        let payment_id = gtk::Label::new(None);
        payment_id.add_css_class("result-detail");
        payment_id.set_selectable(true);

        root.append(&title);
        root.append(&caption);
        root.append(&payment_id);

        Self { root, payment_id }
    }

    pub fn set_payment_id(&self, id: &str) {
        self.payment_id.set_text(id);
    }
}

impl Default for SuccessScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Failure screen; the reason label is filled in on transition.
pub struct FailedScreen {
    pub root: gtk::Box,
    reason: gtk::Label,
}

impl FailedScreen {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
        root.add_css_class("screen");
        root.set_valign(gtk::Align::Center);
        root.set_halign(gtk::Align::Center);

        let title = gtk::Label::new(Some("Payment Cancelled"));
        title.add_css_class("failed-title");

        let reason = gtk::Label::new(Some("Payment failed or cancelled"));
        reason.add_css_class("result-caption");

        let hint = gtk::Label::new(Some("Close app and scan again"));
        hint.add_css_class("result-detail");

        root.append(&title);
        root.append(&reason);
        root.append(&hint);

        Self { root, reason }
    }

    pub fn set_reason(&self, reason: &str) {
        self.reason.set_text(reason);
    }
}

impl Default for FailedScreen {
    fn default() -> Self {
        Self::new()
    }
}
