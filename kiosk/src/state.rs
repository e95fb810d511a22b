//! GTK-free payment state machine.
//!
//! This module contains the pure Rust state machine that can be tested
//! independently of GTK. The UI layer observes phase changes and swaps
//! the visible screen accordingly.

use arkashine_status::{PaymentState, StatusRecord};

/// Shown when a success record arrives without a payment id.
const UNKNOWN_PAYMENT_ID: &str = "unknown";

/// Shown when a failure record arrives without a reason.
const DEFAULT_FAILURE_REASON: &str = "Cancelled";

/// Display phases. `Success` and `Failed` are terminal: once reached the
/// kiosk never leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentPhase {
    /// QR card visible, waiting for the webhook receiver to record an outcome
    Pending,
    Success,
    Failed,
}

/// Events that drive phase transitions
#[derive(Debug, Clone)]
pub enum PaymentEvent {
    /// Result of one status-store poll; None when the store is empty
    StatusChecked { record: Option<StatusRecord> },
}

/// Commands emitted by the state machine for the app layer to execute
#[derive(Debug, Clone)]
pub enum PaymentCommand {
    /// Shut down the background poller
    StopPolling,
    /// Refresh the visible screen
    UpdateUi,
}

/// The kiosk payment state machine
#[derive(Debug)]
pub struct PaymentStateMachine {
    pub phase: PaymentPhase,
    pub payment_id: Option<String>,
    pub failure_reason: Option<String>,
}

impl Default for PaymentStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentStateMachine {
    pub fn new() -> Self {
        Self {
            phase: PaymentPhase::Pending,
            payment_id: None,
            failure_reason: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.phase != PaymentPhase::Pending
    }

    /// Process an event and return commands to execute
    pub fn process(&mut self, event: PaymentEvent) -> Vec<PaymentCommand> {
        let mut commands = Vec::new();

        match event {
            PaymentEvent::StatusChecked { record } => {
                // Terminal phases ignore everything that follows.
                if self.is_terminal() {
                    return commands;
                }

                let Some(record) = record else {
                    return commands;
                };

                match record.state {
                    PaymentState::Success => {
                        self.phase = PaymentPhase::Success;
                        self.payment_id = Some(
                            record
                                .payment_id
                                .unwrap_or_else(|| UNKNOWN_PAYMENT_ID.to_string()),
                        );
                        commands.push(PaymentCommand::StopPolling);
                        commands.push(PaymentCommand::UpdateUi);
                    }

                    PaymentState::Failed => {
                        self.phase = PaymentPhase::Failed;
                        self.payment_id = record.payment_id;
                        self.failure_reason = Some(
                            record
                                .reason
                                .unwrap_or_else(|| DEFAULT_FAILURE_REASON.to_string()),
                        );
                        commands.push(PaymentCommand::StopPolling);
                        commands.push(PaymentCommand::UpdateUi);
                    }

                    // Not an outcome yet; keep showing the QR card.
                    PaymentState::Pending | PaymentState::Unknown => {}
                }
            }
        }

        commands
    }
}
