//! Error types for `jot-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Create input is missing a title or content.
  #[error("validation error: {0}")]
  Validation(String),

  /// No alive note matches the id. Carries the id exactly as the caller
  /// supplied it, which may not be numeric at all.
  #[error("note not found: {0}")]
  NotFound(String),

  #[error("internal error: {0}")]
  Internal(String),
}

impl Error {
  pub fn not_found(id: impl ToString) -> Self { Self::NotFound(id.to_string()) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
