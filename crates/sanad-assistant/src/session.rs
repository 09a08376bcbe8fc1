//! Conversational sessions and the single-shot FAQ helper.
//!
//! A session owns one system instruction and an append-only transcript.
//! `send` takes `&mut self`, so a second send cannot start while one is in
//! flight on the same session — the exclusive borrow is the mutual
//! exclusion, not a runtime flag.

use sanad_core::chat::ChatMessage;
use tracing::warn;

use crate::{SYSTEM_INSTRUCTION, transport::Transport};

/// Shown in place of a reply when the transport fails mid-conversation.
pub const TRANSPORT_FALLBACK: &str =
  "There was an error communicating with the AI. Please try again later.";

/// Shown when the service answered but produced no text.
pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I couldn't process that.";

/// Fallback for a failed single-shot FAQ answer.
pub const FAQ_FALLBACK: &str =
  "Consult the main campus for this specific information.";

/// Fallback for an empty single-shot FAQ answer.
pub const FAQ_EMPTY_FALLBACK: &str = "Contact our support line for details.";

/// Opening message of the chat widget.
pub const GREETING: &str =
  "Hello! I'm your Saylani Assistant. How can I help you with our programs today?";

/// A bound conversational context: one system instruction, an evolving
/// transcript.
#[derive(Debug, Clone)]
pub struct ChatSession {
  system_instruction: String,
  history:            Vec<ChatMessage>,
}

impl ChatSession {
  pub fn new(system_instruction: impl Into<String>) -> Self {
    ChatSession {
      system_instruction: system_instruction.into(),
      history:            Vec::new(),
    }
  }

  /// A session with the standard support instruction.
  pub fn support() -> Self { Self::new(SYSTEM_INSTRUCTION) }

  /// The transcript so far, oldest first.
  pub fn history(&self) -> &[ChatMessage] { &self.history }

  /// Send one user turn and return the assistant's reply.
  ///
  /// Never fails: a transport error becomes [`TRANSPORT_FALLBACK`], an
  /// empty reply becomes [`EMPTY_REPLY_FALLBACK`], and in both cases the
  /// session stays usable for the next send.
  pub async fn send<T: Transport>(
    &mut self,
    transport: &T,
    text: impl Into<String>,
  ) -> String {
    self.history.push(ChatMessage::user(text));

    let reply = match transport
      .generate(&self.system_instruction, &self.history)
      .await
    {
      Ok(text) if text.trim().is_empty() => EMPTY_REPLY_FALLBACK.to_string(),
      Ok(text) => text,
      Err(e) => {
        warn!(error = %e, "assistant transport failed");
        TRANSPORT_FALLBACK.to_string()
      }
    };

    self.history.push(ChatMessage::model(reply.clone()));
    reply
  }
}

/// Answer one reference question without session continuity.
///
/// Same error-to-fallback contract as [`ChatSession::send`], with the FAQ
/// wording.
pub async fn answer_once<T: Transport>(
  transport: &T,
  question: &str,
) -> String {
  let prompt = format!(
    "Provide a professional answer for a student asking this: \"{question}\" \
     about Saylani Welfare training programs."
  );
  let history = [ChatMessage::user(prompt)];

  match transport.generate(SYSTEM_INSTRUCTION, &history).await {
    Ok(text) if text.trim().is_empty() => FAQ_EMPTY_FALLBACK.to_string(),
    Ok(text) => text,
    Err(e) => {
      warn!(error = %e, "single-shot answer failed");
      FAQ_FALLBACK.to_string()
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use sanad_core::chat::Role;

  use super::*;
  use crate::error::TransportError;

  /// Scripted transport: pops pre-seeded outcomes and records every call.
  #[derive(Default)]
  struct FakeTransport {
    replies: Mutex<Vec<Result<String, TransportError>>>,
    calls:   Mutex<Vec<Vec<ChatMessage>>>,
  }

  impl FakeTransport {
    fn scripted(
      replies: Vec<Result<String, TransportError>>,
    ) -> Self {
      FakeTransport {
        replies: Mutex::new(replies),
        calls:   Mutex::new(Vec::new()),
      }
    }
  }

  impl Transport for FakeTransport {
    async fn generate(
      &self,
      _system_instruction: &str,
      history: &[ChatMessage],
    ) -> Result<String, TransportError> {
      self.calls.lock().unwrap().push(history.to_vec());
      let mut replies = self.replies.lock().unwrap();
      if replies.is_empty() {
        return Err(TransportError::Status(503));
      }
      replies.remove(0)
    }
  }

  #[tokio::test]
  async fn send_appends_both_turns() {
    let transport =
      FakeTransport::scripted(vec![Ok("Free of cost".to_string())]);
    let mut session = ChatSession::support();

    let reply = session.send(&transport, "Is it free?").await;

    assert_eq!(reply, "Free of cost");
    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, Role::User);
    assert_eq!(history[0].text, "Is it free?");
    assert_eq!(history[1].role, Role::Model);
    assert_eq!(history[1].text, "Free of cost");
  }

  #[tokio::test]
  async fn transport_sees_the_full_transcript() {
    let transport = FakeTransport::scripted(vec![
      Ok("Answer one".to_string()),
      Ok("Answer two".to_string()),
    ]);
    let mut session = ChatSession::support();

    session.send(&transport, "first").await;
    session.send(&transport, "second").await;

    let calls = transport.calls.lock().unwrap();
    assert_eq!(calls[0].len(), 1);
    // Second call carries user, model, user.
    assert_eq!(calls[1].len(), 3);
    assert_eq!(calls[1][2].text, "second");
  }

  #[tokio::test]
  async fn transport_failure_yields_fallback_and_session_survives() {
    let transport = FakeTransport::scripted(vec![
      Err(TransportError::Status(500)),
      Ok("Back online".to_string()),
    ]);
    let mut session = ChatSession::support();

    let reply = session.send(&transport, "hello?").await;
    assert_eq!(reply, TRANSPORT_FALLBACK);

    // The failed turn is recorded and the next send works normally.
    let reply = session.send(&transport, "still there?").await;
    assert_eq!(reply, "Back online");
    assert_eq!(session.history().len(), 4);
  }

  #[tokio::test]
  async fn empty_reply_maps_to_apology() {
    let transport = FakeTransport::scripted(vec![Ok("  ".to_string())]);
    let mut session = ChatSession::support();
    let reply = session.send(&transport, "hmm").await;
    assert_eq!(reply, EMPTY_REPLY_FALLBACK);
  }

  #[tokio::test]
  async fn answer_once_wraps_the_question() {
    let transport =
      FakeTransport::scripted(vec![Ok("Yes, fully free.".to_string())]);
    let answer = answer_once(&transport, "Is the course free?").await;
    assert_eq!(answer, "Yes, fully free.");

    let calls = transport.calls.lock().unwrap();
    assert_eq!(calls[0].len(), 1);
    assert!(calls[0][0].text.contains("\"Is the course free?\""));
  }

  #[tokio::test]
  async fn answer_once_fallbacks() {
    let transport =
      FakeTransport::scripted(vec![Err(TransportError::Status(429))]);
    assert_eq!(
      answer_once(&transport, "anything").await,
      FAQ_FALLBACK
    );

    let transport = FakeTransport::scripted(vec![Ok(String::new())]);
    assert_eq!(
      answer_once(&transport, "anything").await,
      FAQ_EMPTY_FALLBACK
    );
  }
}
