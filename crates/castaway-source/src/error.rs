//! Error type for `castaway-source`.

use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Which of the three tables an operation concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
  Contestants,
  Seasons,
  Tribes,
}

impl Collection {
  /// File name used by [`crate::DirSource`].
  pub fn file_name(self) -> &'static str {
    match self {
      Self::Contestants => "contestants.csv",
      Self::Seasons => "seasons.csv",
      Self::Tribes => "tribes.csv",
    }
  }
}

impl fmt::Display for Collection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Contestants => "contestants",
      Self::Seasons => "seasons",
      Self::Tribes => "tribes",
    })
  }
}

#[derive(Debug, Error)]
pub enum SourceError {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("GET {url} returned {status}")]
  Status {
    url:    String,
    status: reqwest::StatusCode,
  },

  #[error("reading {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("decoding {collection}: {source}")]
  Csv {
    collection: Collection,
    #[source]
    source:     castaway_csv::Error,
  },
}

pub type Result<T, E = SourceError> = std::result::Result<T, E>;
