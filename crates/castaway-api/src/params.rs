//! Query-string extraction with JSON error bodies.

use axum::{
  extract::{FromRequestParts, Query},
  http::request::Parts,
};
use castaway_core::SeasonFilter;
use castaway_stats::table::{Direction, TableQuery};
use serde::{Deserialize, de::DeserializeOwned};

use crate::ApiError;

/// Like [`Query`], but a malformed query string is rejected with an
/// [`ApiError::BadRequest`] instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Params<T>(pub T);

impl<T, S> FromRequestParts<S> for Params<T>
where
  T: DeserializeOwned,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
    let Query(value) = Query::<T>::from_request_parts(parts, state)
      .await
      .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(Params(value))
  }
}

/// A season-scoped table: `?season=` plus the [`TableQuery`] fields.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TableParams {
  pub season:    Option<String>,
  pub search:    Option<String>,
  pub sort:      Option<String>,
  pub direction: Option<Direction>,
  pub page:      Option<usize>,
}

impl TableParams {
  pub(crate) fn table_query(&self) -> TableQuery {
    TableQuery {
      search:    self.search.clone(),
      sort:      self.sort.clone(),
      direction: self.direction,
      page:      self.page,
    }
  }
}

/// Parse an optional `season` parameter; absent means all seasons.
pub fn season_filter(raw: Option<&str>) -> Result<SeasonFilter, ApiError> {
  Ok(raw.map(str::parse::<SeasonFilter>).transpose()?.unwrap_or_default())
}

/// Split a comma-separated list, dropping empty items.
pub fn split_list(raw: Option<&str>) -> Vec<String> {
  raw
    .unwrap_or_default()
    .split(',')
    .map(str::trim)
    .filter(|item| !item.is_empty())
    .map(str::to_owned)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lists_ignore_blanks() {
    assert_eq!(split_list(Some(" a, ,b ,")), vec!["a", "b"]);
    assert!(split_list(None).is_empty());
  }

  #[test]
  fn season_defaults_to_all() {
    assert_eq!(season_filter(None).unwrap(), SeasonFilter::All);
    assert_eq!(season_filter(Some("4")).unwrap(), SeasonFilter::Season("4".into()));
    assert!(matches!(season_filter(Some("four")), Err(ApiError::BadRequest(_))));
  }
}
