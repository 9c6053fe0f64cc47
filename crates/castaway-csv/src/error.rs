//! Error types for the castaway-csv codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("table has no header row")]
  MissingHeader,

  #[error("malformed row at line {line}: {source}")]
  Row {
    line:   u64,
    #[source]
    source: csv::Error,
  },

  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
