//! Card layout.
//!
//! [`render`] turns a registration into a [`CardView`]: a structured
//! description of the fixed card regions, ready for a [`Rasterizer`]
//! (or any other presentation layer) to draw. Rendering never fails —
//! a registration without a photo gets a deterministic placeholder.
//!
//! [`Rasterizer`]: crate::export::Rasterizer

use sanad_core::registration::Registration;
use serde::Serialize;

use crate::encode::{qr_image_url, verification_payload};

/// Card dimensions in CSS pixels at 1× scale.
pub const CARD_WIDTH: u32 = 400;
pub const CARD_HEIGHT: u32 = 250;

/// Edge length of the verification-code block as drawn on the card.
pub const QR_BLOCK_SIZE: u32 = 64;

const ORG_NAME: &str = "Saylani Welfare";
const CARD_TITLE: &str = "Student Identity Card";
const PLACEHOLDER_SERVICE: &str = "https://picsum.photos/seed";

// ─── Regions ─────────────────────────────────────────────────────────────────

/// Branding ribbon across the top of the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderRegion {
  pub org_name: String,
  pub title:    String,
  /// The identifier badge, e.g. `ID: K3J9X2M1Q`.
  pub id_badge: String,
}

/// Where the photo region gets its pixels from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PhotoSource {
  /// The registrant's own photo, as an encoded `data:` URL.
  Uploaded(String),
  /// Deterministic placeholder, seeded by the full name.
  Placeholder(String),
}

/// Name / program / CNIC block next to the photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityRegion {
  pub full_name: String,
  pub program:   String,
  pub cnic:      String,
}

/// Scannable verification code in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QrRegion {
  /// URL of the external service rendering the payload as a square image.
  pub image_url:    String,
  /// Edge length as drawn on the card.
  pub display_size: u32,
}

// ─── CardView ────────────────────────────────────────────────────────────────

/// The structured, renderable representation of a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
  pub width:      u32,
  pub height:     u32,
  pub header:     HeaderRegion,
  pub photo:      PhotoSource,
  pub identity:   IdentityRegion,
  /// Issue date exactly as recorded on the registration.
  pub issue_date: String,
  pub qr:         QrRegion,
}

/// Deterministic placeholder photo URL for a registrant without an uploaded
/// photo. Same name, same image, every time.
pub fn placeholder_photo_url(full_name: &str) -> String {
  format!("{PLACEHOLDER_SERVICE}/{}/200", urlencoding::encode(full_name))
}

/// Compose the card for a registration. Total function: every registration
/// renders, photo or not.
pub fn render(registration: &Registration) -> CardView {
  let photo = match &registration.profile_image {
    Some(data_url) if !data_url.is_empty() => {
      PhotoSource::Uploaded(data_url.clone())
    }
    _ => PhotoSource::Placeholder(placeholder_photo_url(
      &registration.full_name,
    )),
  };

  CardView {
    width:      CARD_WIDTH,
    height:     CARD_HEIGHT,
    header:     HeaderRegion {
      org_name: ORG_NAME.to_string(),
      title:    CARD_TITLE.to_string(),
      id_badge: format!("ID: {}", registration.id),
    },
    photo,
    identity:   IdentityRegion {
      full_name: registration.full_name.clone(),
      program:   registration.program.to_string(),
      cnic:      registration.cnic.clone(),
    },
    issue_date: registration.issue_date.clone(),
    qr:         QrRegion {
      image_url:    qr_image_url(&verification_payload(registration)),
      display_size: QR_BLOCK_SIZE,
    },
  }
}
