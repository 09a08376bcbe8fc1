//! Error types for `sanad-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown program: {0:?}")]
  UnknownProgram(String),

  #[error("profile image is {size} bytes; the limit is {limit}")]
  PhotoTooLarge { size: usize, limit: usize },

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
