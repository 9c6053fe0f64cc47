//! Configuration and application assembly for the Castaway server.
//!
//! The binary in `main.rs` loads a [`ServerConfig`], builds the configured
//! source behind a [`CachedSource`], and serves [`app`].

use std::{
  path::{Path, PathBuf},
  sync::Arc,
  time::Duration,
};

use axum::Router;
use castaway_api::{DEFAULT_FEATURED_SEASON, api_router};
use castaway_core::DataSource;
use castaway_source::{CachedSource, DEFAULT_TTL, HttpConfig};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Where the three tables are read from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
  /// Fetch the CSV tables over HTTP.
  Http(HttpConfig),
  /// Read `contestants.csv`, `seasons.csv` and `tribes.csv` from a directory.
  Dir { path: PathBuf },
}

impl Default for SourceConfig {
  fn default() -> Self { Self::Http(HttpConfig::default()) }
}

/// Runtime server configuration, deserialised from `config.toml` and
/// `CASTAWAY_*` environment variables. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:            String,
  pub port:            u16,
  /// Seconds each fetched collection is served before it is fetched again.
  pub cache_ttl_secs:  u64,
  /// Season number profiled on the dashboard.
  pub featured_season: String,
  pub source:          SourceConfig,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:            "127.0.0.1".into(),
      port:            3000,
      cache_ttl_secs:  DEFAULT_TTL.as_secs(),
      featured_season: DEFAULT_FEATURED_SEASON.into(),
      source:          SourceConfig::default(),
    }
  }
}

impl ServerConfig {
  /// Read `path` (optional; missing means all defaults), then overlay the
  /// environment. Nested keys use `__`, e.g. `CASTAWAY_SOURCE__KIND=dir`.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("CASTAWAY")
          .prefix_separator("_")
          .separator("__"),
      )
      .build()?
      .try_deserialize()
  }

  pub fn cache_ttl(&self) -> Duration { Duration::from_secs(self.cache_ttl_secs) }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Application ──────────────────────────────────────────────────────────────

/// The full HTTP application: the API under `/api`, with request tracing.
pub fn app<S>(source: CachedSource<S>, config: &ServerConfig) -> Router
where
  S: DataSource + 'static,
{
  Router::new()
    .nest("/api", api_router(Arc::new(source), &config.featured_season))
    .layer(TraceLayer::new_for_http())
}
