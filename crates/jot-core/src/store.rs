//! The `NoteStore` trait.
//!
//! Implemented by storage backends (e.g. `jot-store-memory`). The REST layer
//! depends on this abstraction, not on any concrete backend.

use crate::{
  Result,
  note::{NewNote, Note, NoteId, NoteUpdate},
};

/// Abstraction over a Jot note store.
///
/// Every operation is a short synchronous read-modify-write. Implementations
/// must serialise access internally so that callers on many threads observe
/// unique, strictly increasing ids and never a half-applied mutation.
pub trait NoteStore: Send + Sync {
  /// Validate `input`, assign the next id and append the note.
  ///
  /// A rejected input consumes no id.
  fn create(&self, input: NewNote) -> Result<Note>;

  /// All alive notes in insertion order.
  fn list(&self) -> Result<Vec<Note>>;

  fn get(&self, id: NoteId) -> Result<Note>;

  /// Merge `update` into the note. See [`Note::apply`] for the merge rules.
  fn update(&self, id: NoteId, update: NoteUpdate) -> Result<Note>;

  /// Remove the note and return it. Its id is never handed out again.
  fn delete(&self, id: NoteId) -> Result<Note>;
}
