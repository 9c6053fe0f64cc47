//! Error types for `castaway-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown sort key: {0:?}")]
  UnknownSortKey(String),

  #[error("unknown metric: {0:?}")]
  UnknownMetric(String),

  #[error("invalid season filter: {0:?}")]
  InvalidSeasonFilter(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
