//! `GET /dashboard`: the landing page in one response.
//!
//! Carries the overview cards, the demographics tab, the featured season
//! and the winners tab. `?season=` narrows the votes-against scatter only.

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use castaway_core::DataSource;
use castaway_stats::{
  Slice,
  ages::{AgeBucket, AgeGrouping, AgeOrder, BoxPlot, age_histogram, winner_age_box_plot},
  contestant::{ScatterPoint, votes_vs_finish},
  dashboard::{DashboardStats, dashboard_stats},
  demographics::{
    DemographicStats, SeasonDemographics, contestants_by_country, demographic_stats,
    ethnicity_breakdown, gender_breakdown, season_demographics,
  },
  rankings::{ProfessionCount, Superlatives, WinnerCount, superlatives, top_professions, top_winners},
  season::{
    PerfectGame, SeasonWinner, TimelineEntry, perfect_games, season_winners, winners_timeline,
  },
  tribes::season_by_number,
};
use serde::Serialize;

use crate::{
  AppState,
  charts::SeasonParams,
  error::ApiError,
  params::{Params, season_filter},
  seasons::{SeasonProfile, season_profile},
};

/// Length of the "top" lists.
const TOP_N: usize = 10;

#[derive(Debug, Serialize)]
pub struct Dashboard {
  pub stats:               DashboardStats,
  pub demographics:        DemographicStats,
  pub gender:              Vec<Slice>,
  pub ethnicity:           Vec<Slice>,
  pub countries:           BTreeMap<String, usize>,
  pub ages:                Vec<AgeBucket>,
  pub winner_ages:         Option<BoxPlot>,
  pub top_professions:     Vec<ProfessionCount>,
  pub top_winners:         Vec<WinnerCount>,
  pub superlatives:        Superlatives,
  pub scatter:             Vec<ScatterPoint>,
  pub season_demographics: Vec<SeasonDemographics>,
  /// `None` when the configured season is not in the season table.
  pub featured:            Option<SeasonProfile>,
  pub season_winners:      Vec<SeasonWinner>,
  pub winners:             Vec<TimelineEntry>,
  pub perfect_games:       Vec<PerfectGame>,
}

/// `GET /dashboard[?season=<n>]`
pub async fn handler<S: DataSource>(
  State(state): State<AppState<S>>,
  Params(params): Params<SeasonParams>,
) -> Result<Json<Dashboard>, ApiError> {
  let filter = season_filter(params.season.as_deref())?;

  let contestants = state.contestants("dashboard").await?;
  let seasons = state.seasons("dashboard").await?;
  let tribes = state.tribes("dashboard").await?;

  let featured = season_by_number(&seasons, &state.featured_season)
    .map(|season| season_profile(season, &contestants, &tribes));
  if featured.is_none() {
    tracing::warn!(season = %state.featured_season, "featured season not found");
  }

  Ok(Json(Dashboard {
    stats: dashboard_stats(&contestants, &seasons, &tribes),
    demographics: demographic_stats(&contestants),
    gender: gender_breakdown(&contestants),
    ethnicity: ethnicity_breakdown(&contestants),
    countries: contestants_by_country(&contestants),
    ages: age_histogram(&contestants, AgeGrouping::Range, AgeOrder::Age),
    winner_ages: winner_age_box_plot(&contestants),
    top_professions: top_professions(&contestants, TOP_N),
    top_winners: top_winners(&contestants, TOP_N),
    superlatives: superlatives(&contestants),
    scatter: votes_vs_finish(&contestants, &filter),
    season_demographics: season_demographics(&seasons),
    featured,
    season_winners: season_winners(&seasons),
    winners: winners_timeline(&contestants, &seasons),
    perfect_games: perfect_games(&contestants, &seasons),
  }))
}
