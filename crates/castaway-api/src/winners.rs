//! Handlers for `/winners` endpoints.

use axum::{Json, extract::State};
use castaway_core::DataSource;
use castaway_stats::season::{PerfectGame, WinnerRow, perfect_games, winners_table};

use crate::{AppState, error::ApiError};

/// `GET /winners`: one row per season, ascending.
pub async fn table<S: DataSource>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<WinnerRow>>, ApiError> {
  let contestants = state.contestants("winners table").await?;
  let seasons = state.seasons("winners table").await?;
  Ok(Json(winners_table(&contestants, &seasons)))
}

/// `GET /winners/perfect`: zero-vote winners, latest season first.
pub async fn perfect<S: DataSource>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<PerfectGame>>, ApiError> {
  let contestants = state.contestants("perfect games").await?;
  let seasons = state.seasons("perfect games").await?;
  Ok(Json(perfect_games(&contestants, &seasons)))
}
