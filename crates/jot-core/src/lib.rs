//! Core types and trait definitions for the Jot note store.
//!
//! This crate is deliberately free of HTTP and runtime dependencies.
//! Every other crate in the workspace depends on it.

pub mod error;
pub mod note;
pub mod store;

pub use error::{Error, Result};
pub use note::{NewNote, Note, NoteId, NoteUpdate};
pub use store::NoteStore;
