//! Handlers for `/seasons` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/seasons` | Paged table; `?search=&sort=&direction=&page=` |
//! | `GET`  | `/seasons/{id}` | 404 if the season is not in the season table |

use axum::{
  Json,
  extract::{Path, State},
};
use castaway_core::{Contestant, DataSource, Season, Tribe};
use castaway_stats::{
  season::{CastMember, SeasonStats, cast_by_finish, season_stats, twists},
  table::{self, Page, TableQuery},
  tribes::{contestants_for_season, season_by_number, tribe_color_hex, tribes_for_season},
};
use serde::Serialize;

use crate::{AppState, error::ApiError, params::Params};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /seasons[?search=&sort=&direction=&page=]`
pub async fn list<S: DataSource>(
  State(state): State<AppState<S>>,
  Params(query): Params<TableQuery>,
) -> Result<Json<Page<Season>>, ApiError> {
  let seasons = state.seasons("seasons table").await?;
  Ok(Json(table::apply(&seasons, &query)?))
}

// ─── Profile ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SeasonTribe {
  #[serde(flatten)]
  pub tribe:     Tribe,
  pub color_hex: &'static str,
}

/// Everything the season page shows.
#[derive(Debug, Serialize)]
pub struct SeasonProfile {
  pub season: Season,
  pub stats:  SeasonStats,
  pub twists: Vec<String>,
  pub cast:   Vec<CastMember>,
  pub tribes: Vec<SeasonTribe>,
}

pub(crate) fn season_profile(
  season: &Season,
  contestants: &[Contestant],
  tribes: &[Tribe],
) -> SeasonProfile {
  let cast: Vec<Contestant> = contestants_for_season(contestants, &season.num_season)
    .into_iter()
    .cloned()
    .collect();

  SeasonProfile {
    season: season.clone(),
    stats:  season_stats(season, &cast),
    twists: twists(season),
    cast:   cast_by_finish(&cast),
    tribes: tribes_for_season(tribes, &season.num_season)
      .into_iter()
      .map(|t| SeasonTribe { tribe: t.clone(), color_hex: tribe_color_hex(&t.color) })
      .collect(),
  }
}

/// `GET /seasons/{id}`
pub async fn profile<S: DataSource>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Json<SeasonProfile>, ApiError> {
  let seasons = state.seasons("season profile").await?;
  let season = season_by_number(&seasons, id.trim())
    .ok_or_else(|| ApiError::NotFound(format!("season {id}")))?;

  let contestants = state.contestants("season profile").await?;
  let tribes = state.tribes("season profile").await?;
  Ok(Json(season_profile(season, &contestants, &tribes)))
}
