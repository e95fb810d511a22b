//! Application context - bridges the GTK-free state machine with GTK UI.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use arkashine_status::StatusStore;

use crate::config;
use crate::poll::{self, PollHandle};
use crate::state::{PaymentCommand, PaymentEvent, PaymentStateMachine};

/// Messages sent from async tasks to the GTK main loop
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Process a payment event through the state machine
    Event(PaymentEvent),
}

/// Sender that can dispatch messages to the GTK main loop from any thread
#[derive(Clone)]
pub struct MessageSender {
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl MessageSender {
    pub fn send(&self, msg: AppMessage) {
        let _ = self.tx.send(msg);
    }
}

/// Application context - holds state and provides methods to interact with it
pub struct AppContext {
    /// The GTK-free state machine
    pub state_machine: RefCell<PaymentStateMachine>,
    /// Tokio runtime for async operations
    pub runtime: Arc<tokio::runtime::Runtime>,
    /// Sender for dispatching messages to GTK main loop
    pub message_tx: MessageSender,
    /// Status file shared with the webhook receiver process
    store: StatusStore,
    /// Poller handle (for shutdown on terminal states)
    poll_handle: RefCell<Option<PollHandle>>,
}

impl AppContext {
    pub fn new(
        runtime: Arc<tokio::runtime::Runtime>,
        store: StatusStore,
    ) -> (Rc<Self>, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();

        let ctx = Rc::new(Self {
            state_machine: RefCell::new(PaymentStateMachine::new()),
            runtime,
            message_tx: MessageSender { tx },
            store,
            poll_handle: RefCell::new(None),
        });

        // The payment is pending from the moment the QR is up.
        ctx.start_polling();

        (ctx, rx)
    }

    fn start_polling(&self) {
        let tx = self.message_tx.clone();
        let handle = poll::watch(
            self.runtime.clone(),
            self.store.clone(),
            Duration::from_millis(config::POLL_INTERVAL_MS),
            move |record| {
                tx.send(AppMessage::Event(PaymentEvent::StatusChecked { record }));
            },
        );
        *self.poll_handle.borrow_mut() = Some(handle);
    }

    /// Process an event and execute resulting commands
    /// This should be called from the GTK main loop
    pub fn process_event(self: &Rc<Self>, event: PaymentEvent) -> Vec<PaymentCommand> {
        let commands = self.state_machine.borrow_mut().process(event);

        for cmd in &commands {
            self.execute_command(cmd.clone());
        }

        commands
    }

    /// Execute a command from the state machine
    fn execute_command(self: &Rc<Self>, cmd: PaymentCommand) {
        match cmd {
            PaymentCommand::StopPolling => {
                if let Some(handle) = self.poll_handle.borrow_mut().take() {
                    let rt = self.runtime.clone();
                    rt.spawn(async move {
                        handle.close().await;
                    });
                }
            }

            PaymentCommand::UpdateUi => {
                // Handled by the window after processing events
            }
        }
    }
}
