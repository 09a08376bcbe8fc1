//! Transport error type.
//!
//! These never escape the gateway: [`crate::session`] converts every variant
//! into a static fallback string before the caller sees it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("remote service returned status {0}")]
  Status(u16),

  #[error("malformed response: {0}")]
  Malformed(String),
}
