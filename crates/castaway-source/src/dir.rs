//! [`DirSource`]: the three tables read from local files.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use castaway_core::{Contestant, DataSource, Season, Tribe};

use crate::{Collection, Result, SourceError};

/// Reads `contestants.csv`, `seasons.csv` and `tribes.csv` from one
/// directory on every read.
#[derive(Debug, Clone)]
pub struct DirSource {
  root: PathBuf,
}

impl DirSource {
  pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

  pub fn root(&self) -> &Path { &self.root }

  async fn read(&self, collection: Collection) -> Result<String> {
    let path = self.root.join(collection.file_name());
    tracing::debug!(%collection, path = %path.display(), "reading table");
    tokio::fs::read_to_string(&path)
      .await
      .map_err(|source| SourceError::Io { path, source })
  }
}

impl DataSource for DirSource {
  type Error = SourceError;

  async fn contestants(&self) -> Result<Arc<[Contestant]>> {
    let text = self.read(Collection::Contestants).await?;
    let rows = castaway_csv::parse_contestants(&text)
      .map_err(|source| SourceError::Csv { collection: Collection::Contestants, source })?;
    Ok(rows.into())
  }

  async fn seasons(&self) -> Result<Arc<[Season]>> {
    let text = self.read(Collection::Seasons).await?;
    let rows = castaway_csv::parse_seasons(&text)
      .map_err(|source| SourceError::Csv { collection: Collection::Seasons, source })?;
    Ok(rows.into())
  }

  async fn tribes(&self) -> Result<Arc<[Tribe]>> {
    let text = self.read(Collection::Tribes).await?;
    let rows = castaway_csv::parse_tribes(&text)
      .map_err(|source| SourceError::Csv { collection: Collection::Tribes, source })?;
    Ok(rows.into())
  }
}
