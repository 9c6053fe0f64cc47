//! JSON API for the Castaway statistics service.
//!
//! Exposes an axum [`Router`] backed by any [`castaway_core::DataSource`].
//! Every view reads the collections it needs independently and computes its
//! own aggregate; a failing view has no effect on the others.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", castaway_api::api_router(source.clone(), "43"))
//! ```

pub mod changelog;
pub mod charts;
pub mod compare;
pub mod contestants;
pub mod dashboard;
pub mod error;
pub mod params;
pub mod seasons;
pub mod tribes;
pub mod winners;

use std::sync::Arc;

use axum::{Router, routing::get};
use castaway_core::{Contestant, DataSource, Season, Tribe};

pub use error::ApiError;

/// Season shown on the dashboard when none is configured.
pub const DEFAULT_FEATURED_SEASON: &str = "43";

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct AppState<S> {
  pub source:          Arc<S>,
  /// Season number profiled on the dashboard.
  pub featured_season: Arc<str>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      source:          Arc::clone(&self.source),
      featured_season: Arc::clone(&self.featured_season),
    }
  }
}

impl<S: DataSource> AppState<S> {
  pub(crate) async fn contestants(&self, view: &'static str) -> Result<Arc<[Contestant]>, ApiError> {
    self
      .source
      .contestants()
      .await
      .map_err(|e| ApiError::unavailable(view, e))
  }

  pub(crate) async fn seasons(&self, view: &'static str) -> Result<Arc<[Season]>, ApiError> {
    self
      .source
      .seasons()
      .await
      .map_err(|e| ApiError::unavailable(view, e))
  }

  pub(crate) async fn tribes(&self, view: &'static str) -> Result<Arc<[Tribe]>, ApiError> {
    self
      .source
      .tribes()
      .await
      .map_err(|e| ApiError::unavailable(view, e))
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `source`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(source: Arc<S>, featured_season: &str) -> Router<()>
where
  S: DataSource + 'static,
{
  let state = AppState { source, featured_season: Arc::from(featured_season) };

  Router::new()
    .route("/dashboard", get(dashboard::handler::<S>))
    // Tables and profiles
    .route("/contestants", get(contestants::list::<S>))
    .route("/contestants/{name}", get(contestants::profile::<S>))
    .route("/seasons", get(seasons::list::<S>))
    .route("/seasons/{id}", get(seasons::profile::<S>))
    .route("/tribes", get(tribes::list::<S>))
    // Comparison tool
    .route("/compare/contestants", get(compare::contestants::<S>))
    .route("/compare/seasons", get(compare::seasons::<S>))
    // Charts
    .route("/charts/ages", get(charts::ages::<S>))
    .route("/charts/scatter", get(charts::scatter::<S>))
    .route("/charts/tribes", get(charts::tribes::<S>))
    .route("/charts/seasons", get(charts::seasons::<S>))
    .route("/charts/states", get(charts::states::<S>))
    // Winners
    .route("/winners", get(winners::table::<S>))
    .route("/winners/perfect", get(winners::perfect::<S>))
    .route("/changelog", get(changelog::handler))
    .with_state(state)
}
