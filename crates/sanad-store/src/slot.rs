//! The durable key-value slot.
//!
//! The store owns exactly one named slot holding the serialized registration
//! sequence. Reads happen once at startup; every append rewrites the whole
//! payload. Two processes sharing a slot are last-write-wins; there is no
//! merge.

use std::{
  fs, io,
  path::{Path, PathBuf},
  sync::Mutex,
};

use crate::{Error, Result};

/// The slot name, carried over from the original frontend's localStorage key.
pub const SLOT_NAME: &str = "saylani_local_db";

/// A single named persistent storage location.
pub trait DurableSlot {
  /// Read the current payload. `None` when the slot has never been written.
  fn read(&self) -> Result<Option<String>>;

  /// Overwrite the payload in full.
  fn write(&self, payload: &str) -> Result<()>;
}

// A store can borrow its slot; tests use this to inspect the slot afterwards.
impl<S: DurableSlot + ?Sized> DurableSlot for &S {
  fn read(&self) -> Result<Option<String>> { (**self).read() }

  fn write(&self, payload: &str) -> Result<()> { (**self).write(payload) }
}

// ─── File slot ────────────────────────────────────────────────────────────────

/// A slot backed by one JSON file under a data directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
  path: PathBuf,
}

impl FileSlot {
  /// A slot named [`SLOT_NAME`] inside `data_dir`. Creates the directory if
  /// needed.
  pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
    let dir = data_dir.as_ref();
    fs::create_dir_all(dir)?;
    Ok(FileSlot { path: dir.join(format!("{SLOT_NAME}.json")) })
  }

  pub fn path(&self) -> &Path { &self.path }
}

impl DurableSlot for FileSlot {
  fn read(&self) -> Result<Option<String>> {
    match fs::read_to_string(&self.path) {
      Ok(payload) => Ok(Some(payload)),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(e) => Err(e.into()),
    }
  }

  fn write(&self, payload: &str) -> Result<()> {
    // Write-then-rename so an interrupted write never truncates the slot.
    let tmp = self.path.with_extension("json.tmp");
    fs::write(&tmp, payload)?;
    fs::rename(&tmp, &self.path)?;
    Ok(())
  }
}

// ─── Memory slot ──────────────────────────────────────────────────────────────

/// An in-memory slot for tests and ephemeral runs. Can be switched into a
/// failing mode to simulate quota-exceeded storage.
#[derive(Debug, Default)]
pub struct MemorySlot {
  payload:     Mutex<Option<String>>,
  fail_writes: Mutex<bool>,
}

impl MemorySlot {
  pub fn new() -> Self { Self::default() }

  /// Pre-seed the slot, as if a previous session had written it.
  pub fn seeded(payload: &str) -> Self {
    let slot = Self::new();
    *lock(&slot.payload) = Some(payload.to_string());
    slot
  }

  /// Make every subsequent write fail.
  pub fn fail_writes(&self, fail: bool) {
    *lock(&self.fail_writes) = fail;
  }
}

impl DurableSlot for MemorySlot {
  fn read(&self) -> Result<Option<String>> {
    Ok(lock(&self.payload).clone())
  }

  fn write(&self, payload: &str) -> Result<()> {
    if *lock(&self.fail_writes) {
      return Err(Error::WriteRefused("simulated quota exceeded".into()));
    }
    *lock(&self.payload) = Some(payload.to_string());
    Ok(())
  }
}

/// Lock a mutex, recovering the data from a poisoned guard.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
  mutex.lock().unwrap_or_else(|e| e.into_inner())
}
