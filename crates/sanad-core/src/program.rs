//! The catalog of offered training programs.
//!
//! The display names are load-bearing: they appear on issued cards, in the
//! verification payload, and in the persisted JSON, so they must round-trip
//! exactly.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, de, ser};

use crate::Error;

/// A training program a student can register for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
  WebAndMobileAppDevelopment,
  GraphicDesign,
  DigitalMarketing,
  ArtificialIntelligence,
  FreelancingAndBusiness,
  VideoEditing,
}

impl Program {
  /// All offered programs, in catalog order.
  pub const ALL: [Program; 6] = [
    Program::WebAndMobileAppDevelopment,
    Program::GraphicDesign,
    Program::DigitalMarketing,
    Program::ArtificialIntelligence,
    Program::FreelancingAndBusiness,
    Program::VideoEditing,
  ];

  /// The display name shown on forms and printed on cards.
  pub fn display_name(&self) -> &'static str {
    match self {
      Program::WebAndMobileAppDevelopment => "Web & Mobile App Development",
      Program::GraphicDesign => "Graphic Design",
      Program::DigitalMarketing => "Digital Marketing",
      Program::ArtificialIntelligence => "Artificial Intelligence",
      Program::FreelancingAndBusiness => "Freelancing & Business",
      Program::VideoEditing => "Video Editing",
    }
  }
}

impl fmt::Display for Program {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.display_name())
  }
}

impl FromStr for Program {
  type Err = Error;

  /// Accepts the exact display name; anything else is unknown.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Program::ALL
      .iter()
      .find(|p| p.display_name() == s)
      .copied()
      .ok_or_else(|| Error::UnknownProgram(s.to_string()))
  }
}

// Serialise as the display name so persisted registrations keep the exact
// strings the frontend wrote.
impl Serialize for Program {
  fn serialize<S: ser::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(self.display_name())
  }
}

impl<'de> Deserialize<'de> for Program {
  fn deserialize<D: de::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(d)?;
    raw.parse().map_err(de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_names_round_trip() {
    for p in Program::ALL {
      assert_eq!(p.display_name().parse::<Program>().unwrap(), p);
    }
  }

  #[test]
  fn unknown_name_is_rejected() {
    assert!("Cooking".parse::<Program>().is_err());
    assert!("".parse::<Program>().is_err());
    // Case matters; the catalog string is canonical.
    assert!("graphic design".parse::<Program>().is_err());
  }

  #[test]
  fn serde_uses_display_name() {
    let json = serde_json::to_string(&Program::GraphicDesign).unwrap();
    assert_eq!(json, "\"Graphic Design\"");
    let back: Program = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Program::GraphicDesign);
  }
}
