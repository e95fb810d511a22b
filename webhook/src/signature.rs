//! Webhook signature verification.
//!
//! Razorpay signs the raw request body with HMAC-SHA256 under the shared
//! webhook secret and sends the hex-encoded digest in
//! `X-Razorpay-Signature`.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Hex-encoded HMAC-SHA256 digest of `payload` under `secret`.
pub fn sign(payload: &[u8], secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Constant-time comparison of the provided signature against the
/// expected digest.
pub fn verify(payload: &[u8], signature: &str, secret: &str) -> bool {
    let expected = sign(payload, secret);
    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}
