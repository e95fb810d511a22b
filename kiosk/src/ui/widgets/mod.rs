//! Reusable widgets.

pub mod qr_image;
