//! Verification payload encoding.
//!
//! The payload is the plain-text record baked into the card's scannable
//! code. It must be deterministic: a verifier re-deriving it from the same
//! registration has to get the same bytes.

use sanad_core::registration::Registration;

/// Side length of the QR image requested from the external service.
pub const QR_SIZE: u32 = 150;

const QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Derive the line-delimited verification record for a registration.
pub fn verification_payload(registration: &Registration) -> String {
  format!(
    "ID: {}\nName: {}\nProgram: {}",
    registration.id, registration.full_name, registration.program
  )
}

/// The URL of the external service that renders `payload` as a scannable
/// square image.
pub fn qr_image_url(payload: &str) -> String {
  format!(
    "{QR_SERVICE}?size={QR_SIZE}x{QR_SIZE}&data={}",
    urlencoding::encode(payload)
  )
}
