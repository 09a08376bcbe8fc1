//! Top-level application state and its reducer-style transitions.
//!
//! All mutable state the UI layer needs — current route, the store, the
//! active registration, the chat transcript — lives here and changes only
//! through the named transition methods. Command handlers borrow the `App`;
//! nothing mutates ambient globals.

use sanad_assistant::session::GREETING;
use sanad_core::{
  chat::ChatMessage,
  faq::{Faq, builtin_faqs},
  registration::{Registration, SubmissionDraft},
  validate::{self, ValidationErrors},
};
use sanad_store::{DurableSlot, RegistrationStore};
use tracing::warn;

// ─── Route ────────────────────────────────────────────────────────────────────

/// The portal's top-level surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
  Home,
  Register,
  IdCard,
  Faqs,
  SupportChat,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App<S: DurableSlot> {
  route:      Route,
  store:      RegistrationStore<S>,
  /// Identifier of the registration the card view shows.
  current_id: Option<String>,
  faqs:       Vec<Faq>,
  /// Widget transcript; session-scoped, starts with the greeting.
  transcript: Vec<ChatMessage>,
}

impl<S: DurableSlot> App<S> {
  pub fn new(store: RegistrationStore<S>) -> Self {
    App {
      route: Route::Home,
      store,
      current_id: None,
      faqs: builtin_faqs(),
      transcript: vec![ChatMessage::model(GREETING)],
    }
  }

  pub fn route(&self) -> Route { self.route }

  pub fn store(&self) -> &RegistrationStore<S> { &self.store }

  pub fn faqs(&self) -> &[Faq] { &self.faqs }

  pub fn transcript(&self) -> &[ChatMessage] { &self.transcript }

  /// The registration the card view is showing, if any.
  pub fn current_registration(&self) -> Option<&Registration> {
    self.current_id.as_deref().and_then(|id| self.store.find_by_id(id))
  }

  // ── Transitions ───────────────────────────────────────────────────────────

  pub fn navigate(&mut self, route: Route) { self.route = route; }

  pub fn append_message(&mut self, message: ChatMessage) {
    self.transcript.push(message);
  }

  /// Show the card for an existing registration. Returns `None` (and leaves
  /// the route alone) when the id is unknown.
  pub fn view_card(&mut self, id: &str) -> Option<&Registration> {
    if self.store.find_by_id(id).is_none() {
      return None;
    }
    self.current_id = Some(id.to_string());
    self.route = Route::IdCard;
    self.current_registration()
  }

  /// Validate and submit a registration draft.
  ///
  /// On success the registration is issued, appended to the store, becomes
  /// the current card, and the route moves to the card view — strictly after
  /// the in-memory append. A persistence failure only degrades durability;
  /// it is logged and the submission still succeeds.
  pub fn submit_registration(
    &mut self,
    draft: &SubmissionDraft,
  ) -> Result<&Registration, ValidationErrors> {
    let validated = validate::validate(draft)?;
    let registration = Registration::issue(validated);
    let id = registration.id.clone();

    if let Err(e) = self.store.append(registration) {
      warn!(error = %e, "registration saved in memory only; persistence failed");
    }

    self.current_id = Some(id);
    self.route = Route::IdCard;
    // The append placed it at the head.
    Ok(&self.store.registrations()[0])
  }
}

#[cfg(test)]
mod tests {
  use chrono::Local;
  use sanad_card::encode::verification_payload;
  use sanad_core::{registration::format_issue_date, validate::Field};
  use sanad_store::MemorySlot;

  use super::*;

  fn app() -> App<MemorySlot> {
    App::new(RegistrationStore::open(MemorySlot::new()).unwrap())
  }

  fn ali_khan() -> SubmissionDraft {
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
  fn submit_issues_card_and_moves_route() {
    let mut app = app();
    assert_eq!(app.route(), Route::Home);

    let reg = app.submit_registration(&ali_khan()).unwrap();
    assert!(!reg.id.is_empty());
    assert_eq!(reg.issue_date, format_issue_date(Local::now().date_naive()));

    let payload = verification_payload(reg);
    assert!(payload.contains("Ali Khan"));
    assert!(payload.contains("Graphic Design"));

    assert_eq!(app.route(), Route::IdCard);
    assert_eq!(app.store().len(), 1);
    assert_eq!(app.current_registration().unwrap().full_name, "Ali Khan");
  }

  #[test]
  fn rejected_submission_changes_nothing() {
    let mut app = app();
    let mut draft = ali_khan();
    draft.cnic = "421011234567-1".into();

    let errors = app.submit_registration(&draft).unwrap_err();
    assert!(errors.get(Field::Cnic).is_some());
    assert_eq!(app.store().len(), 0);
    assert_eq!(app.route(), Route::Home);
    assert!(app.current_registration().is_none());
  }

  #[test]
  fn persistence_failure_does_not_block_submission() {
    let slot = MemorySlot::new();
    slot.fail_writes(true);
    let mut app = App::new(RegistrationStore::open(&slot).unwrap());

    let reg = app.submit_registration(&ali_khan()).unwrap();
    assert_eq!(reg.full_name, "Ali Khan");
    assert_eq!(app.route(), Route::IdCard);
    assert_eq!(app.store().len(), 1);
  }

  #[test]
  fn transcript_starts_with_greeting_and_appends() {
    let mut app = app();
    assert_eq!(app.transcript().len(), 1);
    app.append_message(ChatMessage::user("Is it free?"));
    assert_eq!(app.transcript().len(), 2);
  }
}
