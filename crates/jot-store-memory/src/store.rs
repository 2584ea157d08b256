//! [`MemoryStore`] — the in-process implementation of [`NoteStore`].

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use jot_core::{Error, NewNote, Note, NoteId, NoteStore, NoteUpdate, Result};

// ─── State ───────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct Inner {
  /// Alive notes in insertion order.
  notes:   Vec<Note>,
  /// The id the next successful create will receive.
  next_id: NoteId,
}

impl Inner {
  fn position(&self, id: NoteId) -> Result<usize> {
    self
      .notes
      .iter()
      .position(|n| n.id == id)
      .ok_or_else(|| Error::not_found(id))
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A note store held entirely in memory.
///
/// Share it between request handlers with an `Arc`; all methods take `&self`.
#[derive(Debug)]
pub struct MemoryStore {
  inner: Mutex<Inner>,
}

impl Default for MemoryStore {
  fn default() -> Self { Self::new() }
}

impl MemoryStore {
  /// An empty store whose first note will get id `1`.
  pub fn new() -> Self {
    Self {
      inner: Mutex::new(Inner {
        notes:   Vec::new(),
        next_id: NoteId::FIRST,
      }),
    }
  }

  /// Number of alive notes.
  pub fn len(&self) -> Result<usize> { Ok(self.lock()?.notes.len()) }

  pub fn is_empty(&self) -> Result<bool> { Ok(self.len()? == 0) }

  /// A panic while the lock was held leaves the state unknown, so it is
  /// reported as an internal fault instead of being propagated.
  fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
    self
      .inner
      .lock()
      .map_err(|_| Error::Internal("note store lock poisoned".to_string()))
  }
}

#[cfg(test)]
impl MemoryStore {
  /// An empty store whose next create will be assigned `next_id`.
  pub(crate) fn starting_at(next_id: NoteId) -> Self {
    let store = Self::new();
    store.inner.lock().unwrap().next_id = next_id;
    store
  }

  /// Panic while holding the lock, leaving the mutex poisoned.
  pub(crate) fn poison(&self) {
    let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
      let _guard = self.inner.lock().unwrap();
      panic!("panic while holding the note store lock");
    }));
  }
}

impl NoteStore for MemoryStore {
  fn create(&self, input: NewNote) -> Result<Note> {
    // Validate before touching the counter so a rejected create burns no id.
    let (title, content) = input.validate()?;

    let mut inner = self.lock()?;
    let id = inner.next_id;
    let next_id = id
      .next()
      .ok_or_else(|| Error::Internal("note id space exhausted".to_string()))?;
    let now = Utc::now();
    let note = Note {
      id,
      title,
      content,
      created_at: now,
      updated_at: now,
    };
    inner.notes.push(note.clone());
    inner.next_id = next_id;

    tracing::debug!(%id, total = inner.notes.len(), "note created");
    Ok(note)
  }

  fn list(&self) -> Result<Vec<Note>> { Ok(self.lock()?.notes.clone()) }

  fn get(&self, id: NoteId) -> Result<Note> {
    let inner = self.lock()?;
    let idx = inner.position(id)?;
    Ok(inner.notes[idx].clone())
  }

  fn update(&self, id: NoteId, update: NoteUpdate) -> Result<Note> {
    let mut inner = self.lock()?;
    let idx = inner.position(id)?;
    let note = &mut inner.notes[idx];
    note.apply(update, Utc::now());

    tracing::debug!(%id, "note updated");
    Ok(note.clone())
  }

  fn delete(&self, id: NoteId) -> Result<Note> {
    let mut inner = self.lock()?;
    let idx = inner.position(id)?;
    // `remove`, not `swap_remove`: listing order must stay insertion order.
    let note = inner.notes.remove(idx);

    tracing::debug!(%id, remaining = inner.notes.len(), "note deleted");
    Ok(note)
  }
}
