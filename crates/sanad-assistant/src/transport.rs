//! The remote text-generation transport abstraction.

use sanad_core::chat::ChatMessage;

use crate::error::TransportError;

/// A remote text-generation service.
///
/// `history` is the full ordered transcript so far, ending with the user
/// turn being answered. Single-shot callers pass a one-element history.
pub trait Transport {
  async fn generate(
    &self,
    system_instruction: &str,
    history: &[ChatMessage],
  ) -> Result<String, TransportError>;
}
