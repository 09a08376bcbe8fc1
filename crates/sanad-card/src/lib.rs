//! Identity-card pipeline: verification payload, card layout, raster export
//! and the share deep link.
//!
//! Everything here is a pure function of a [`Registration`]
//! (plus URLs pointing at the external QR and placeholder-image services);
//! the only fallible step is handing the finished layout to a
//! [`Rasterizer`].
//!
//! [`Registration`]: sanad_core::registration::Registration

pub mod encode;
pub mod error;
pub mod export;
pub mod render;
pub mod share;

pub use error::{Error, Result};
pub use export::{EXPORT_SCALE, ExportedCard, Rasterizer, export};
pub use render::{CardView, render};
