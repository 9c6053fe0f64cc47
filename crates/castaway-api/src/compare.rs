//! Handlers for the comparison tool.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/compare/contestants` | `?names=a,b&metric=finish\|votes_against\|normalized_finish\|age` |
//! | `GET`  | `/compare/seasons` | `?seasons=1,2&metric=contestants\|days\|merge\|jury\|demographics` |

use axum::{Json, extract::State};
use castaway_core::DataSource;
use castaway_stats::compare::{
  Comparison, ContestantMetric, SeasonMetric, compare_contestants, compare_seasons,
};
use serde::Deserialize;

use crate::{
  AppState,
  error::ApiError,
  params::{Params, split_list},
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContestantParams {
  pub names:  Option<String>,
  pub metric: Option<String>,
}

/// `GET /compare/contestants?names=<a,b>[&metric=<m>]`
pub async fn contestants<S: DataSource>(
  State(state): State<AppState<S>>,
  Params(params): Params<ContestantParams>,
) -> Result<Json<Vec<Comparison>>, ApiError> {
  let metric = match params.metric.as_deref() {
    Some(m) => m.parse::<ContestantMetric>()?,
    None => ContestantMetric::default(),
  };
  let names = split_list(params.names.as_deref());
  if names.is_empty() {
    return Ok(Json(Vec::new()));
  }

  let contestants = state.contestants("contestant comparison").await?;
  Ok(Json(compare_contestants(&contestants, &names, metric)))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeasonParams {
  pub seasons: Option<String>,
  pub metric:  Option<String>,
}

/// `GET /compare/seasons?seasons=<1,2>[&metric=<m>]`
pub async fn seasons<S: DataSource>(
  State(state): State<AppState<S>>,
  Params(params): Params<SeasonParams>,
) -> Result<Json<Vec<Comparison>>, ApiError> {
  let metric = match params.metric.as_deref() {
    Some(m) => m.parse::<SeasonMetric>()?,
    None => SeasonMetric::default(),
  };
  let numbers = split_list(params.seasons.as_deref());
  if numbers.is_empty() {
    return Ok(Json(Vec::new()));
  }

  let seasons = state.seasons("season comparison").await?;
  Ok(Json(compare_seasons(&seasons, &numbers, metric)))
}
