//! Raster export.
//!
//! Rasterization itself is an external capability behind the [`Rasterizer`]
//! trait; this module owns the contract around it: the oversampling factor,
//! the artifact file name, and the error mapping that keeps a rasterizer
//! failure recoverable.

use crate::{Error, Result, render::CardView};

/// Oversampling factor for print/download quality.
pub const EXPORT_SCALE: u32 = 3;

/// External capability that draws a [`CardView`] into PNG bytes.
pub trait Rasterizer {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Rasterize `view` at `scale`× the card's native dimensions.
  fn rasterize(&self, view: &CardView, scale: u32)
  -> Result<Vec<u8>, Self::Error>;
}

/// A finished export artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedCard {
  /// Suggested file name, derived from the registrant's name.
  pub file_name: String,
  /// PNG bytes at [`EXPORT_SCALE`]× resolution.
  pub png:       Vec<u8>,
}

/// Export a rendered card at [`EXPORT_SCALE`]×.
///
/// A rasterizer failure maps to [`Error::Rasterize`], whose message already
/// carries the print-instead suggestion; nothing here is fatal.
pub fn export<R: Rasterizer>(
  rasterizer: &R,
  view: &CardView,
  full_name: &str,
) -> Result<ExportedCard> {
  let png = rasterizer
    .rasterize(view, EXPORT_SCALE)
    .map_err(|e| Error::Rasterize(e.to_string()))?;
  Ok(ExportedCard { file_name: export_file_name(full_name), png })
}

/// `Saylani-ID-<name>.png`, with whitespace runs collapsed to single dashes.
pub fn export_file_name(full_name: &str) -> String {
  let sanitized: Vec<&str> = full_name.split_whitespace().collect();
  format!("Saylani-ID-{}.png", sanitized.join("-"))
}

#[cfg(test)]
mod tests {
  use std::convert::Infallible;

  use sanad_core::{program::Program, registration::Registration};
  use thiserror::Error;

  use super::*;
  use crate::render::render;

  struct FakeRasterizer;

  impl Rasterizer for FakeRasterizer {
    type Error = Infallible;

    fn rasterize(
      &self,
      view: &CardView,
      scale: u32,
    ) -> Result<Vec<u8>, Self::Error> {
      // A stand-in payload that proves view and scale reached the backend.
      Ok(format!("{}x{}@{scale}", view.width, view.height).into_bytes())
    }
  }

  #[derive(Debug, Error)]
  #[error("canvas unavailable")]
  struct CanvasDown;

  struct BrokenRasterizer;

  impl Rasterizer for BrokenRasterizer {
    type Error = CanvasDown;

    fn rasterize(&self, _: &CardView, _: u32) -> Result<Vec<u8>, Self::Error> {
      Err(CanvasDown)
    }
  }

  fn registration() -> Registration {
    Registration {
      id:            "K3J9X2M1Q".into(),
      full_name:     "Ali  Raza Khan".into(),
      cnic:          "42101-1234567-1".into(),
      email:         "ali@example.com".into(),
      phone:         "03001234567".into(),
      address:       "House 1, Karachi".into(),
      program:       Program::VideoEditing,
      issue_date:    "8/26/2026".into(),
      profile_image: None,
    }
  }

  #[test]
  fn exports_at_triple_scale() {
    let reg = registration();
    let card = export(&FakeRasterizer, &render(&reg), &reg.full_name).unwrap();
    assert_eq!(card.png, b"400x250@3");
  }

  #[test]
  fn file_name_collapses_whitespace_runs() {
    assert_eq!(export_file_name("Ali  Raza Khan"), "Saylani-ID-Ali-Raza-Khan.png");
    assert_eq!(export_file_name("Ali\tKhan"), "Saylani-ID-Ali-Khan.png");
    assert_eq!(export_file_name(" Ali "), "Saylani-ID-Ali.png");
  }

  #[test]
  fn rasterizer_failure_is_recoverable_with_fallback_hint() {
    let reg = registration();
    let err =
      export(&BrokenRasterizer, &render(&reg), &reg.full_name).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("canvas unavailable"));
    assert!(msg.contains("Print"));
  }
}
