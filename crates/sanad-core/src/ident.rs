//! Registration identifier generation.
//!
//! Identifiers are short, human-presentable strings printed on cards and
//! read back over the phone, so they stay uppercase alphanumeric. Uniqueness
//! is probabilistic: 36^9 values make a collision vanishingly unlikely for a
//! single-device store, and the store does not re-check on append.

use rand_core::{OsRng, RngCore};

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of a registration identifier in characters.
pub const ID_LEN: usize = 9;

/// Generate a fresh registration identifier.
///
/// Always succeeds; draws from the OS entropy source.
pub fn generate() -> String {
  let mut bytes = [0u8; ID_LEN];
  OsRng.fill_bytes(&mut bytes);
  bytes
    .iter()
    .map(|b| ALPHABET[(*b as usize) % ALPHABET.len()] as char)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn id_shape() {
    let id = generate();
    assert_eq!(id.len(), ID_LEN);
    assert!(id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
  }

  #[test]
  fn ids_differ() {
    // Not a uniqueness proof, just a sanity check that the source is live.
    let a = generate();
    let b = generate();
    assert_ne!(a, b);
  }
}
