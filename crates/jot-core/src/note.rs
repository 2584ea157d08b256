//! Note types — the only entity in the Jot store.
//!
//! A note is created once, merged into by updates, and removed by delete. Its
//! identifier and creation timestamp never change.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Message carried by [`Error::Validation`] when a create is rejected.
pub const MISSING_FIELDS: &str = "title and content are required";

// ─── Identifier ──────────────────────────────────────────────────────────────

/// A store-assigned note identifier. Always positive; the first note is `1`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
  /// The identifier handed to the first note a fresh store creates.
  pub const FIRST: NoteId = NoteId(1);

  pub fn get(self) -> u64 { self.0 }

  /// The identifier that follows this one, or `None` once the id space is
  /// exhausted.
  pub fn next(self) -> Option<Self> { self.0.checked_add(1).map(Self) }
}

impl fmt::Display for NoteId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Parse an id from its textual form (a path segment, a CLI argument).
///
/// Only plain decimal digits are accepted. Anything else, including `0`,
/// signs, whitespace, and values beyond `u64::MAX`, fails with
/// [`Error::NotFound`] so that a malformed id looks exactly like a missing
/// one.
impl FromStr for NoteId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
      return Err(Error::not_found(s));
    }
    match s.parse::<u64>() {
      Ok(0) | Err(_) => Err(Error::not_found(s)),
      Ok(n) => Ok(Self(n)),
    }
  }
}

// ─── Note ────────────────────────────────────────────────────────────────────

/// A stored note. Serialises with the camelCase keys web clients expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
  pub id:         NoteId,
  pub title:      String,
  pub content:    String,
  /// Set by the store at creation; never changes.
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Note {
  /// Merge `update` into this note and stamp it as modified at `now`.
  ///
  /// Blank or missing fields keep their stored value. `updated_at` is
  /// refreshed even when nothing else changes, but never moves backwards.
  pub fn apply(&mut self, update: NoteUpdate, now: DateTime<Utc>) {
    if let Some(title) = non_blank(update.title) {
      self.title = title;
    }
    if let Some(content) = non_blank(update.content) {
      self.content = content;
    }
    self.updated_at = now.max(self.updated_at);
  }
}

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// Input to [`crate::store::NoteStore::create`].
///
/// Both fields are optional here because callers pass through whatever the
/// request carried; the store decides whether it is acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewNote {
  pub title:   Option<String>,
  pub content: Option<String>,
}

impl NewNote {
  pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
    Self {
      title:   Some(title.into()),
      content: Some(content.into()),
    }
  }

  /// Check that both fields are present and non-blank, returning them.
  ///
  /// Accepted values are returned verbatim; only whitespace-only input is
  /// treated as blank.
  pub fn validate(self) -> Result<(String, String)> {
    match (non_blank(self.title), non_blank(self.content)) {
      (Some(title), Some(content)) => Ok((title, content)),
      _ => Err(Error::Validation(MISSING_FIELDS.to_string())),
    }
  }
}

/// Input to [`crate::store::NoteStore::update`]. Each field is merged
/// independently; see [`Note::apply`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteUpdate {
  pub title:   Option<String>,
  pub content: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.trim().is_empty())
}
