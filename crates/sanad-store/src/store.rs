//! The registration store.
//!
//! Append-only from the caller's perspective: registrations are inserted at
//! the head and never mutated or removed. The in-memory sequence is the
//! source of truth for the running session; the slot is best-effort
//! durability behind it.

use sanad_core::registration::Registration;
use tracing::warn;

use crate::{Result, slot::DurableSlot};

/// An append-only, most-recent-first collection of registrations backed by
/// one durable slot.
pub struct RegistrationStore<S: DurableSlot> {
  slot:          S,
  registrations: Vec<Registration>,
}

impl<S: DurableSlot> RegistrationStore<S> {
  /// Open the store, loading whatever the slot holds.
  ///
  /// A missing slot is a fresh start. A malformed payload is logged and
  /// treated the same way — corrupt history never blocks new registrations.
  pub fn open(slot: S) -> Result<Self> {
    let registrations = match slot.read()? {
      None => Vec::new(),
      Some(payload) => match serde_json::from_str(&payload) {
        Ok(regs) => regs,
        Err(e) => {
          warn!(error = %e, "discarding malformed registration slot");
          Vec::new()
        }
      },
    };
    Ok(RegistrationStore { slot, registrations })
  }

  /// Append a registration at the head and persist the full sequence.
  ///
  /// The in-memory append always takes effect. A persistence failure comes
  /// back as an `Err` so the caller can warn the user about degraded
  /// durability; the sequence itself is left intact either way.
  pub fn append(&mut self, registration: Registration) -> Result<()> {
    self.registrations.insert(0, registration);
    self.persist()
  }

  fn persist(&self) -> Result<()> {
    let payload = serde_json::to_string(&self.registrations)?;
    self.slot.write(&payload)
  }

  /// All registrations, most-recent-first.
  pub fn registrations(&self) -> &[Registration] { &self.registrations }

  pub fn len(&self) -> usize { self.registrations.len() }

  pub fn is_empty(&self) -> bool { self.registrations.is_empty() }

  /// Look up a registration by its identifier.
  pub fn find_by_id(&self, id: &str) -> Option<&Registration> {
    self.registrations.iter().find(|r| r.id == id)
  }
}
