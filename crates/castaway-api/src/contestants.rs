//! Handlers for `/contestants` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/contestants` | Paged table; `?season=&search=&sort=&direction=&page=` |
//! | `GET`  | `/contestants/{name}` | Every appearance; name is case-insensitive. 404 if none |

use axum::{
  Json,
  extract::{Path, State},
};
use castaway_core::{Contestant, DataSource};
use castaway_stats::{
  contestant::{ContestantStats, Identity, Performance, contestant_stats, identity, performance},
  table::{self, Page},
  tribes::{contestant_seasons, season_by_number},
};
use chrono::Utc;
use serde::Serialize;

use crate::{
  AppState,
  error::ApiError,
  params::{Params, TableParams, season_filter},
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contestants[?season=&search=&sort=&direction=&page=]`
pub async fn list<S: DataSource>(
  State(state): State<AppState<S>>,
  Params(params): Params<TableParams>,
) -> Result<Json<Page<Contestant>>, ApiError> {
  let filter = season_filter(params.season.as_deref())?;
  let contestants = state.contestants("contestants table").await?;
  let rows: Vec<Contestant> = contestants
    .iter()
    .filter(|c| filter.matches(&c.num_season))
    .cloned()
    .collect();
  Ok(Json(table::apply(&rows, &params.table_query())?))
}

// ─── Profile ──────────────────────────────────────────────────────────────────

/// One season's worth of a contestant's profile.
#[derive(Debug, Serialize)]
pub struct Appearance {
  #[serde(flatten)]
  pub contestant:  Contestant,
  /// Display name of the season, when the season table has it.
  pub season_name: Option<String>,
  pub identity:    Identity,
  pub stats:       ContestantStats,
  pub performance: Performance,
}

/// `GET /contestants/{name}`
///
/// The path segment arrives percent-decoded.
pub async fn profile<S: DataSource>(
  State(state): State<AppState<S>>,
  Path(name): Path<String>,
) -> Result<Json<Vec<Appearance>>, ApiError> {
  let contestants = state.contestants("contestant profile").await?;
  let appearances = contestant_seasons(&contestants, &name);
  if appearances.is_empty() {
    return Err(ApiError::NotFound(format!("contestant {name}")));
  }

  let seasons = state.seasons("contestant profile").await?;
  let today = Utc::now().date_naive();
  let profile = appearances
    .into_iter()
    .map(|c| Appearance {
      contestant:  c.clone(),
      season_name: season_by_number(&seasons, &c.num_season).map(|s| s.season.clone()),
      identity:    identity(c, today),
      stats:       contestant_stats(c, &contestants),
      performance: performance(c),
    })
    .collect();
  Ok(Json(profile))
}
