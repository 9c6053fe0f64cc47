//! Handlers for the standalone chart series.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/charts/ages` | `?group=range\|individual&order=age\|count` |
//! | `GET`  | `/charts/scatter` | Votes against vs. finish; `?season=` |
//! | `GET`  | `/charts/tribes` | Non-merge tribe makeup; `?season=` |
//! | `GET`  | `/charts/seasons` | `?metric=demographics\|structure\|twists` |
//! | `GET`  | `/charts/states` | Contestants per US state |

use axum::{Json, extract::State};
use castaway_core::DataSource;
use castaway_stats::{
  ages::{AgeBucket, AgeGrouping, AgeOrder, age_histogram},
  contestant::{ScatterPoint, votes_vs_finish},
  season::{SeasonBars, SeasonMetricGroup, season_comparison},
  states::{StateDistribution, state_distribution},
  tribes::{TribeComposition, tribe_composition},
};
use serde::Deserialize;

use crate::{
  AppState,
  error::ApiError,
  params::{Params, season_filter},
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AgeParams {
  pub group: AgeGrouping,
  pub order: AgeOrder,
}

/// `GET /charts/ages`
pub async fn ages<S: DataSource>(
  State(state): State<AppState<S>>,
  Params(params): Params<AgeParams>,
) -> Result<Json<Vec<AgeBucket>>, ApiError> {
  let contestants = state.contestants("age histogram").await?;
  Ok(Json(age_histogram(&contestants, params.group, params.order)))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeasonParams {
  pub season: Option<String>,
}

/// `GET /charts/scatter`
pub async fn scatter<S: DataSource>(
  State(state): State<AppState<S>>,
  Params(params): Params<SeasonParams>,
) -> Result<Json<Vec<ScatterPoint>>, ApiError> {
  let filter = season_filter(params.season.as_deref())?;
  let contestants = state.contestants("votes scatter").await?;
  Ok(Json(votes_vs_finish(&contestants, &filter)))
}

/// `GET /charts/tribes`
pub async fn tribes<S: DataSource>(
  State(state): State<AppState<S>>,
  Params(params): Params<SeasonParams>,
) -> Result<Json<Vec<TribeComposition>>, ApiError> {
  let filter = season_filter(params.season.as_deref())?;
  let tribes = state.tribes("tribe composition").await?;
  Ok(Json(tribe_composition(&tribes, &filter)))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MetricParams {
  pub metric: Option<String>,
}

/// `GET /charts/seasons`
pub async fn seasons<S: DataSource>(
  State(state): State<AppState<S>>,
  Params(params): Params<MetricParams>,
) -> Result<Json<Vec<SeasonBars>>, ApiError> {
  let group = match params.metric.as_deref() {
    Some(m) => m.parse::<SeasonMetricGroup>()?,
    None => SeasonMetricGroup::default(),
  };
  let seasons = state.seasons("season chart").await?;
  Ok(Json(season_comparison(&seasons, group)))
}

/// `GET /charts/states`
pub async fn states<S: DataSource>(
  State(state): State<AppState<S>>,
) -> Result<Json<StateDistribution>, ApiError> {
  let contestants = state.contestants("state map").await?;
  Ok(Json(state_distribution(&contestants)))
}
