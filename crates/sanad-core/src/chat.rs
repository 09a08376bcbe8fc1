//! Chat transcript types shared by the assistant gateway and the UI layer.
//!
//! Transcripts are session-scoped and append-only; they are never persisted
//! across restarts.

use serde::{Deserialize, Serialize};

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  User,
  Model,
}

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
  pub role: Role,
  pub text: String,
}

impl ChatMessage {
  pub fn user(text: impl Into<String>) -> Self {
    ChatMessage { role: Role::User, text: text.into() }
  }

  pub fn model(text: impl Into<String>) -> Self {
    ChatMessage { role: Role::Model, text: text.into() }
  }
}
