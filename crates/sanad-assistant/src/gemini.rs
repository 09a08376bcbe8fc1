//! Gemini `generateContent` transport.
//!
//! Speaks the v1beta REST API directly; no SDK. The API key travels in the
//! query string, which is how the service authenticates browser-grade
//! clients.

use std::time::Duration;

use sanad_core::chat::{ChatMessage, Role};
use serde::{Deserialize, Serialize};

use crate::{error::TransportError, transport::Transport};

/// The model the portal ships with.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

// ─── Wire types ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
  system_instruction: WireContent<'a>,
  contents:           Vec<WireContent<'a>>,
}

#[derive(Serialize)]
struct WireContent<'a> {
  #[serde(skip_serializing_if = "Option::is_none")]
  role:  Option<&'static str>,
  parts: Vec<WirePart<'a>>,
}

#[derive(Serialize)]
struct WirePart<'a> {
  text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
  #[serde(default)]
  candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
  content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
  #[serde(default)]
  parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
  #[serde(default)]
  text: String,
}

fn wire_role(role: Role) -> &'static str {
  match role {
    Role::User => "user",
    Role::Model => "model",
  }
}

fn request_body<'a>(
  system_instruction: &'a str,
  history: &'a [ChatMessage],
) -> GenerateRequest<'a> {
  GenerateRequest {
    system_instruction: WireContent {
      role:  None,
      parts: vec![WirePart { text: system_instruction }],
    },
    contents:           history
      .iter()
      .map(|m| WireContent {
        role:  Some(wire_role(m.role)),
        parts: vec![WirePart { text: &m.text }],
      })
      .collect(),
  }
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// HTTP transport against the Gemini `generateContent` endpoint.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct GeminiClient {
  http:    reqwest::Client,
  api_key: String,
  model:   String,
}

impl GeminiClient {
  pub fn new(api_key: impl Into<String>) -> Result<Self, TransportError> {
    let http = reqwest::Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(GeminiClient {
      http,
      api_key: api_key.into(),
      model: DEFAULT_MODEL.to_string(),
    })
  }

  pub fn with_model(mut self, model: impl Into<String>) -> Self {
    self.model = model.into();
    self
  }

  fn url(&self) -> String {
    format!(
      "{API_BASE}/models/{}:generateContent?key={}",
      self.model,
      urlencoding::encode(&self.api_key)
    )
  }
}

impl Transport for GeminiClient {
  async fn generate(
    &self,
    system_instruction: &str,
    history: &[ChatMessage],
  ) -> Result<String, TransportError> {
    let body = request_body(system_instruction, history);
    let resp = self.http.post(self.url()).json(&body).send().await?;

    let status = resp.status();
    if !status.is_success() {
      return Err(TransportError::Status(status.as_u16()));
    }

    let parsed: GenerateResponse = resp
      .json()
      .await
      .map_err(|e| TransportError::Malformed(e.to_string()))?;

    let text = parsed
      .candidates
      .first()
      .and_then(|c| c.content.as_ref())
      .map(|content| {
        content
          .parts
          .iter()
          .map(|p| p.text.as_str())
          .collect::<Vec<_>>()
          .join("")
      })
      .unwrap_or_default();

    Ok(text)
  }
}
