//! GTK4 widgets and screens.

pub mod pending;
pub mod result;
pub mod widgets;
pub mod window;

pub use window::{MainWindow, PaymentCard};
