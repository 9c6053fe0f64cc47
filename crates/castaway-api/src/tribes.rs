//! Handler for the `/tribes` table.

use axum::{Json, extract::State};
use castaway_core::{DataSource, Tribe};
use castaway_stats::table::{self, Page};

use crate::{
  AppState,
  error::ApiError,
  params::{Params, TableParams, season_filter},
};

/// `GET /tribes[?season=&search=&sort=&direction=&page=]`
pub async fn list<S: DataSource>(
  State(state): State<AppState<S>>,
  Params(params): Params<TableParams>,
) -> Result<Json<Page<Tribe>>, ApiError> {
  let filter = season_filter(params.season.as_deref())?;
  let tribes = state.tribes("tribes table").await?;
  let rows: Vec<Tribe> = tribes
    .iter()
    .filter(|t| filter.matches(&t.num_season))
    .cloned()
    .collect();
  Ok(Json(table::apply(&rows, &params.table_query())?))
}
