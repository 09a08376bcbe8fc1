//! The validation engine.
//!
//! Every rule is evaluated independently so the form can flag all failing
//! fields at once. Acceptance is all-or-nothing: a submission is only
//! accepted when the error map comes back empty.

use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::{
  program::Program,
  registration::SubmissionDraft,
};

// ─── Fields ──────────────────────────────────────────────────────────────────

/// A validated form field. `as_str` yields the camelCase key the frontend
/// uses to attach inline errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
  FullName,
  Cnic,
  Email,
  Phone,
  Address,
  Program,
  ProfileImage,
}

impl Field {
  pub fn as_str(&self) -> &'static str {
    match self {
      Field::FullName => "fullName",
      Field::Cnic => "cnic",
      Field::Email => "email",
      Field::Phone => "phone",
      Field::Address => "address",
      Field::Program => "program",
      Field::ProfileImage => "profileImage",
    }
  }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Per-field validation failures. Never empty when returned as an `Err`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
  fn insert(&mut self, field: Field, message: &str) {
    self.0.insert(field, message.to_string());
  }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn len(&self) -> usize { self.0.len() }

  /// The message for a field, if that field failed.
  pub fn get(&self, field: Field) -> Option<&str> {
    self.0.get(&field).map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
    self.0.iter().map(|(f, m)| (*f, m.as_str()))
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for (field, msg) in self.iter() {
      if !first {
        write!(f, "; ")?;
      }
      write!(f, "{}: {}", field.as_str(), msg)?;
      first = false;
    }
    Ok(())
  }
}

// ─── Validated output ────────────────────────────────────────────────────────

/// A submission that passed every rule. Field values are carried verbatim
/// from the draft; only the program is parsed into its typed form.
#[derive(Debug, Clone)]
pub struct ValidatedSubmission {
  pub full_name:     String,
  pub cnic:          String,
  pub email:         String,
  pub phone:         String,
  pub address:       String,
  pub program:       Program,
  pub profile_image: String,
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Validate a raw submission.
///
/// Returns the typed submission when every rule passes, otherwise the full
/// map of failing fields. Partial acceptance does not exist.
pub fn validate(
  draft: &SubmissionDraft,
) -> Result<ValidatedSubmission, ValidationErrors> {
  let mut errors = ValidationErrors::default();

  if draft.full_name.trim().is_empty() {
    errors.insert(Field::FullName, "Full Name is required");
  }
  if !cnic_is_valid(&draft.cnic) {
    errors.insert(Field::Cnic, "CNIC format: XXXXX-XXXXXXX-X");
  }
  if !email_is_valid(&draft.email) {
    errors.insert(Field::Email, "Valid Email is required");
  }
  if draft.phone.is_empty() || draft.phone.chars().count() < 11 {
    errors.insert(Field::Phone, "Valid Phone number is required");
  }
  if draft.address.is_empty() {
    errors.insert(Field::Address, "Address is required");
  }

  let program = match draft.program.parse::<Program>() {
    Ok(p) => Some(p),
    Err(_) => {
      errors.insert(Field::Program, "Please select a program");
      None
    }
  };

  let profile_image = match &draft.profile_image {
    Some(img) if !img.is_empty() => Some(img.clone()),
    _ => {
      errors.insert(Field::ProfileImage, "Profile picture is required");
      None
    }
  };

  match (program, profile_image) {
    (Some(program), Some(profile_image)) if errors.is_empty() => {
      Ok(ValidatedSubmission {
        full_name: draft.full_name.clone(),
        cnic: draft.cnic.clone(),
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        address: draft.address.clone(),
        program,
        profile_image,
      })
    }
    _ => Err(errors),
  }
}

/// `NNNNN-NNNNNNN-N`: 5 digits, dash, 7 digits, dash, 1 digit.
fn cnic_is_valid(cnic: &str) -> bool {
  let bytes = cnic.as_bytes();
  if bytes.len() != 15 {
    return false;
  }
  bytes.iter().enumerate().all(|(i, b)| match i {
    5 | 13 => *b == b'-',
    _ => b.is_ascii_digit(),
  })
}

/// Minimal structural check: a local part, an `@`, and a dotted domain.
/// Not RFC 5322; the form only needs to catch obvious typos.
fn email_is_valid(email: &str) -> bool {
  if email.chars().any(char::is_whitespace) {
    return false;
  }
  let Some((local, domain)) = email.split_once('@') else {
    return false;
  };
  if local.is_empty() {
    return false;
  }
  match domain.rsplit_once('.') {
    Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
    None => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn valid_draft() -> SubmissionDraft {
    SubmissionDraft {
      full_name:     "Ali Khan".into(),
      cnic:          "42101-1234567-1".into(),
      email:         "ali@example.com".into(),
      phone:         "03001234567".into(),
      address:       "House 1, Karachi".into(),
      program:       "Graphic Design".into(),
      profile_image: Some("data:image/png;base64,AAAA".into()),
    }
  }

  #[test]
  fn valid_submission_passes_verbatim() {
    let draft = valid_draft();
    let v = validate(&draft).unwrap();
    assert_eq!(v.full_name, draft.full_name);
    assert_eq!(v.cnic, draft.cnic);
    assert_eq!(v.email, draft.email);
    assert_eq!(v.phone, draft.phone);
    assert_eq!(v.address, draft.address);
    assert_eq!(v.program, Program::GraphicDesign);
  }

  #[test]
  fn empty_draft_reports_every_field() {
    let errors = validate(&SubmissionDraft::default()).unwrap_err();
    for field in [
      Field::FullName,
      Field::Cnic,
      Field::Email,
      Field::Phone,
      Field::Address,
      Field::Program,
      Field::ProfileImage,
    ] {
      assert!(errors.get(field).is_some(), "missing error for {field:?}");
    }
    assert_eq!(errors.len(), 7);
  }

  #[test]
  fn missing_field_is_keyed_exactly() {
    let mut draft = valid_draft();
    draft.address.clear();
    let errors = validate(&draft).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Address), Some("Address is required"));
  }

  #[test]
  fn cnic_patterns() {
    let check = |cnic: &str| {
      let mut draft = valid_draft();
      draft.cnic = cnic.into();
      validate(&draft).is_ok()
    };
    assert!(check("42101-1234567-1"));
    assert!(!check("421011234567-1"));
    assert!(!check("4210-1234567-1"));
    assert!(!check(""));
    assert!(!check("42101-1234567-12"));
    assert!(!check("4210a-1234567-1"));
  }

  #[test]
  fn email_structure() {
    let check = |email: &str| {
      let mut draft = valid_draft();
      draft.email = email.into();
      validate(&draft).is_ok()
    };
    assert!(check("ali@example.com"));
    assert!(check("a.b+c@mail.example.co"));
    assert!(!check("ali.example.com"));
    assert!(!check("@example.com"));
    assert!(!check("ali@example"));
    assert!(!check("ali@.com"));
    assert!(!check("ali khan@example.com"));
  }

  #[test]
  fn phone_length() {
    let mut draft = valid_draft();
    draft.phone = "0300123456".into(); // 10 chars
    assert!(validate(&draft).is_err());
    draft.phone = "03001234567".into(); // 11 chars
    assert!(validate(&draft).is_ok());
  }

  #[test]
  fn whitespace_only_name_fails() {
    let mut draft = valid_draft();
    draft.full_name = "   ".into();
    let errors = validate(&draft).unwrap_err();
    assert!(errors.get(Field::FullName).is_some());
  }

  #[test]
  fn empty_photo_string_counts_as_missing() {
    let mut draft = valid_draft();
    draft.profile_image = Some(String::new());
    let errors = validate(&draft).unwrap_err();
    assert_eq!(
      errors.get(Field::ProfileImage),
      Some("Profile picture is required")
    );
  }

  #[test]
  fn unknown_program_fails() {
    let mut draft = valid_draft();
    draft.program = "Basket Weaving".into();
    let errors = validate(&draft).unwrap_err();
    assert_eq!(errors.get(Field::Program), Some("Please select a program"));
  }
}
