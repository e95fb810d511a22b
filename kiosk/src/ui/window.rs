//! Main application window driving the three payment screens.

use gtk4 as gtk;
use gtk4::prelude::*;
use libadwaita as adw;
use libadwaita::prelude::*;
use std::rc::Rc;

use crate::app::{AppContext, AppMessage};
use crate::config;
use crate::state::{PaymentCommand, PaymentPhase};
use crate::ui::pending;
use crate::ui::result::{FailedScreen, SuccessScreen};

/// Static data the pending screen renders: the QR image made from the
/// payment link, and the amount to show.
#[derive(Clone)]
pub struct PaymentCard {
    pub qr_png: Vec<u8>,
    pub amount_rupees: i64,
}

/// Main window containing the pending/success/failed screen stack
pub struct MainWindow {
    pub window: adw::ApplicationWindow,
    ctx: Rc<AppContext>,
    stack: gtk::Stack,
    success: SuccessScreen,
    failed: FailedScreen,
}

impl MainWindow {
    pub fn new(app: &gtk::Application, ctx: Rc<AppContext>, card: &PaymentCard) -> Rc<Self> {
        let window = adw::ApplicationWindow::builder()
            .application(app)
            .title("ArkaShine | Payments")
            .default_width(config::WINDOW_WIDTH)
            .default_height(config::WINDOW_HEIGHT)
            .resizable(false)
            .build();

        let stack = gtk::Stack::new();
        stack.set_transition_type(gtk::StackTransitionType::Crossfade);

        let pending_screen = pending::create_pending_screen(&card.qr_png, card.amount_rupees);
        let success = SuccessScreen::new();
        let failed = FailedScreen::new();

        stack.add_named(&pending_screen, Some("pending"));
        stack.add_named(&success.root, Some("success"));
        stack.add_named(&failed.root, Some("failed"));

        window.set_content(Some(&stack));

        let main_window = Rc::new(Self {
            window,
            ctx,
            stack,
            success,
            failed,
        });

        main_window.load_css();
        main_window.update_ui();

        main_window
    }

    fn load_css(&self) {
        let provider = gtk::CssProvider::new();
        provider.load_from_string(include_str!("../../resources/style.css"));

        gtk::style_context_add_provider_for_display(
            &gtk::gdk::Display::default().expect("No display"),
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Handle app messages - main entry point for state updates
    pub fn handle_message(self: &Rc<Self>, msg: AppMessage) {
        match msg {
            AppMessage::Event(ref event) => {
                let commands = self.ctx.process_event(event.clone());

                if commands
                    .iter()
                    .any(|c| matches!(c, PaymentCommand::UpdateUi))
                {
                    self.update_ui();
                }
            }
        }
    }

    /// Update the visible screen to reflect the current phase
    fn update_ui(self: &Rc<Self>) {
        let sm = self.ctx.state_machine.borrow();

        match sm.phase {
            PaymentPhase::Pending => {
                self.stack.set_visible_child_name("pending");
            }

            PaymentPhase::Success => {
                self.success
                    .set_payment_id(sm.payment_id.as_deref().unwrap_or("unknown"));
                self.stack.set_visible_child_name("success");
            }

            PaymentPhase::Failed => {
                self.failed
                    .set_reason(sm.failure_reason.as_deref().unwrap_or("Cancelled"));
                self.stack.set_visible_child_name("failed");
            }
        }
    }
}
