//! Registration — the fundamental record of the store.
//!
//! A registration is created once, from a validated submission, and is never
//! mutated afterwards. There is no update or delete anywhere in the system;
//! corrections mean registering again.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{ident, program::Program, validate::ValidatedSubmission};

/// A validated student submission with an assigned identifier.
///
/// Field names serialise in camelCase so a store written by the original
/// web frontend deserialises unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
  /// Short opaque identifier, assigned at creation. See [`crate::ident`].
  pub id:            String,
  pub full_name:     String,
  pub cnic:          String,
  pub email:         String,
  pub phone:         String,
  pub address:       String,
  pub program:       Program,
  /// Submission date as shown on the card, e.g. `8/26/2026`.
  pub issue_date:    String,
  /// Encoded photo (`data:` URL). Absent records still render; the card
  /// substitutes a placeholder.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub profile_image: Option<String>,
}

impl Registration {
  /// Issue a registration from a validated submission, dated today.
  pub fn issue(submission: ValidatedSubmission) -> Self {
    Self::issue_on(submission, Local::now().date_naive())
  }

  /// Issue a registration with an explicit date. Used by tests and anywhere
  /// the clock must be pinned.
  pub fn issue_on(submission: ValidatedSubmission, date: NaiveDate) -> Self {
    Registration {
      id:            ident::generate(),
      full_name:     submission.full_name,
      cnic:          submission.cnic,
      email:         submission.email,
      phone:         submission.phone,
      address:       submission.address,
      program:       submission.program,
      issue_date:    format_issue_date(date),
      profile_image: Some(submission.profile_image),
    }
  }
}

/// Render a date the way the card shows it: no zero padding, month first.
pub fn format_issue_date(date: NaiveDate) -> String {
  date.format("%-m/%-d/%Y").to_string()
}

/// The raw form input, prior to validation. All fields are as typed.
#[derive(Debug, Clone, Default)]
pub struct SubmissionDraft {
  pub full_name:     String,
  pub cnic:          String,
  pub email:         String,
  pub phone:         String,
  pub address:       String,
  /// The selected program's display name; empty when nothing was selected.
  pub program:       String,
  /// Encoded photo, if one was attached and passed the size check.
  pub profile_image: Option<String>,
}
