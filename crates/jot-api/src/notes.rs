//! Handlers for `/notes` endpoints.
//!
//! | Method   | Path          | Notes |
//! |----------|---------------|-------|
//! | `GET`    | `/notes`      | All notes, insertion order |
//! | `POST`   | `/notes`      | Body: `{"title":"..","content":".."}`; 201 + note |
//! | `GET`    | `/notes/:id`  | 404 if not found or id is malformed |
//! | `PUT`    | `/notes/:id`  | Body: any of `title`, `content`; blank fields are ignored |
//! | `DELETE` | `/notes/:id`  | Returns `{"message":"Note deleted","note":{..}}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use jot_core::{NewNote, Note, NoteId, NoteStore, NoteUpdate};
use serde::Serialize;

use crate::error::ApiError;

/// Unwrap a JSON body. A request without a JSON content type is read as an
/// empty object, so it reaches the store and fails or merges like `{}`.
fn body_or_default<T: Default>(
  body: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiError> {
  match body {
    Ok(Json(body)) => Ok(body),
    Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
    Err(rejection) => Err(rejection.into()),
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /notes`
pub async fn list<S: NoteStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Note>>, ApiError> {
  let notes = store.list()?;
  tracing::info!(count = notes.len(), "listing notes");
  Ok(Json(notes))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /notes` — body: `{"title":"...","content":"..."}`
pub async fn create<S: NoteStore>(
  State(store): State<Arc<S>>,
  body: Result<Json<NewNote>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
  let body = body_or_default(body)?;
  tracing::debug!(title = ?body.title, content = ?body.content, "create request");
  let note = store.create(body)?;
  tracing::info!(id = %note.id, "created note");
  Ok((StatusCode::CREATED, Json(note)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /notes/:id`
pub async fn get_one<S: NoteStore>(
  State(store): State<Arc<S>>,
  Path(raw): Path<String>,
) -> Result<Json<Note>, ApiError> {
  tracing::info!(id = %raw, "fetching note");
  let id: NoteId = raw.parse()?;
  Ok(Json(store.get(id)?))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /notes/:id` — body: `{"title"?: "...", "content"?: "..."}`
pub async fn update_one<S: NoteStore>(
  State(store): State<Arc<S>>,
  Path(raw): Path<String>,
  body: Result<Json<NoteUpdate>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
  tracing::info!(id = %raw, "updating note");
  let body = body_or_default(body)?;
  tracing::debug!(title = ?body.title, content = ?body.content, "update request");
  let id: NoteId = raw.parse()?;
  Ok(Json(store.update(id, body)?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Deleted {
  pub message: &'static str,
  pub note:    Note,
}

/// `DELETE /notes/:id`
pub async fn delete_one<S: NoteStore>(
  State(store): State<Arc<S>>,
  Path(raw): Path<String>,
) -> Result<Json<Deleted>, ApiError> {
  tracing::info!(id = %raw, "deleting note");
  let id: NoteId = raw.parse()?;
  let note = store.delete(id)?;
  Ok(Json(Deleted { message: "Note deleted", note }))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
