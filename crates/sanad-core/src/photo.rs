//! Profile photo encoding.
//!
//! Photos travel inside the registration record as `data:` URLs so the whole
//! store serialises to a single JSON payload. The size limit applies to the
//! raw bytes, before base64 inflates them.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::{Error, Result};

/// Maximum accepted raw image size: 2 MiB.
pub const MAX_PHOTO_BYTES: usize = 2 * 1024 * 1024;

/// Encode raw image bytes as a `data:` URL suitable for
/// [`Registration::profile_image`](crate::registration::Registration).
///
/// Rejects images over [`MAX_PHOTO_BYTES`] before encoding.
pub fn encode_profile_image(bytes: &[u8], media_type: &str) -> Result<String> {
  if bytes.len() > MAX_PHOTO_BYTES {
    return Err(Error::PhotoTooLarge {
      size:  bytes.len(),
      limit: MAX_PHOTO_BYTES,
    });
  }
  Ok(format!("data:{};base64,{}", media_type, STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn encodes_small_image() {
    let url = encode_profile_image(b"\x89PNG", "image/png").unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
  }

  #[test]
  fn rejects_oversized_image() {
    let big = vec![0u8; MAX_PHOTO_BYTES + 1];
    let err = encode_profile_image(&big, "image/jpeg").unwrap_err();
    assert!(matches!(err, Error::PhotoTooLarge { .. }));
  }

  #[test]
  fn limit_is_inclusive() {
    let exact = vec![0u8; MAX_PHOTO_BYTES];
    assert!(encode_profile_image(&exact, "image/png").is_ok());
  }
}
