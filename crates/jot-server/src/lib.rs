//! HTTP server assembly for Jot.
//!
//! Wraps the [`jot_api`] router with request tracing, CORS for the configured
//! web origins, and optional static file serving for a bundled web client.

pub mod error;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  http::{HeaderValue, Method, header},
};
use jot_core::NoteStore;
use serde::Deserialize;
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  services::{ServeDir, ServeFile},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and `JOT_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:            String,
  #[serde(default = "default_port")]
  pub port:            u16,
  /// Browser origins allowed to call the API with credentials.
  #[serde(default = "default_allowed_origins")]
  pub allowed_origins: Vec<String>,
  /// Directory holding a built web client. When set, unknown paths fall back
  /// to its `index.html`.
  #[serde(default)]
  pub static_dir:      Option<PathBuf>,
}

fn default_host() -> String { "0.0.0.0".to_string() }

fn default_port() -> u16 { 5002 }

fn default_allowed_origins() -> Vec<String> {
  vec![
    "http://localhost:3000".to_string(),
    "http://localhost:3001".to_string(),
  ]
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:            default_host(),
      port:            default_port(),
      allowed_origins: default_allowed_origins(),
      static_dir:      None,
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router.
///
/// The notes API is reachable under both `/api/notes` and `/notes`, the
/// latter for dev proxies that strip the `/api` prefix.
pub fn router<S>(store: Arc<S>, config: &ServerConfig) -> Result<Router, Error>
where
  S: NoteStore + 'static,
{
  let api = jot_api::api_router(store);
  let mut app = Router::new().merge(api.clone()).nest("/api", api);

  if let Some(dir) = &config.static_dir {
    let index = ServeFile::new(dir.join("index.html"));
    app = app.fallback_service(ServeDir::new(dir).fallback(index));
  }

  Ok(
    app
      .layer(cors_layer(&config.allowed_origins)?)
      .layer(TraceLayer::new_for_http()),
  )
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer, Error> {
  let origins = origins
    .iter()
    .map(|o| {
      HeaderValue::from_str(o).map_err(|source| Error::InvalidOrigin {
        origin: o.clone(),
        source,
      })
    })
    .collect::<Result<Vec<_>, _>>()?;

  Ok(
    CorsLayer::new()
      .allow_origin(AllowOrigin::list(origins))
      .allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
      ])
      .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
      .allow_credentials(true),
  )
}

// ─── Integration tests ────────────────────────────────────────────────────────
