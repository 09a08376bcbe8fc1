//! File-backed registration store for the Sanad portal.
//!
//! Registrations live in one named durable slot as a single JSON document,
//! rewritten in full on every append — the localStorage model of the
//! original frontend, kept deliberately simple.

mod store;

pub mod error;
pub mod slot;

pub use error::{Error, Result};
pub use slot::{DurableSlot, FileSlot, MemorySlot, SLOT_NAME};
pub use store::RegistrationStore;
