//! Error type for `sanad-store`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("slot io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// The slot backend refused the write (quota, permissions, …).
  #[error("slot write refused: {0}")]
  WriteRefused(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
