//! Error types for the card pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The external rasterizer failed. Recoverable: the caller should offer
  /// the native print path instead.
  #[error("failed to rasterize the ID card ({0}); try the Print option instead")]
  Rasterize(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
