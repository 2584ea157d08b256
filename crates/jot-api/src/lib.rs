//! JSON REST API for Jot.
//!
//! Exposes an axum [`Router`] backed by any [`jot_core::NoteStore`].
//! CORS, static files, and the listener are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let api = jot_api::api_router(store.clone());
//! Router::new().merge(api.clone()).nest("/api", api)
//! ```

pub mod error;
pub mod notes;

use std::sync::Arc;

use axum::{Router, routing::get};
use jot_core::NoteStore;

pub use error::ApiError;

/// Build the `/notes` router for `store`.
///
/// The returned `Router<()>` can be merged or nested into any parent router
/// regardless of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: NoteStore + 'static,
{
  Router::new()
    .route("/notes", get(notes::list::<S>).post(notes::create::<S>))
    .route(
      "/notes/{id}",
      get(notes::get_one::<S>)
        .put(notes::update_one::<S>)
        .delete(notes::delete_one::<S>),
    )
    .with_state(store)
}
