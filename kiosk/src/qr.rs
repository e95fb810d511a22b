//! QR code rendering for the payment link.

use qrcode::QrCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Encode `url` as a QR code and return PNG bytes at least `size` pixels
/// square.
pub fn render_png(url: &str, size: u32) -> Result<Vec<u8>, QrError> {
    let code = QrCode::new(url.as_bytes())?;
    let img = code
        .render::<image::Luma<u8>>()
        .min_dimensions(size, size)
        .build();

    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_png() {
        let png = render_png("https://rzp.io/l/abc123", 300).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn output_meets_requested_size() {
        let png = render_png("https://rzp.io/l/abc123", 300).unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert!(img.width() >= 300);
        assert!(img.height() >= 300);
    }
}
