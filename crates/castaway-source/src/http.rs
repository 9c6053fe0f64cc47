//! [`HttpSource`]: the three tables fetched over HTTP.

use std::{sync::Arc, time::Duration};

use castaway_core::{Contestant, DataSource, Season, Tribe};
use reqwest::Client;
use serde::Deserialize;

use crate::{Collection, Result, SourceError};

const BLOB_BASE: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com";

/// Where the tables live and how long to wait for them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
  pub contestants_url: String,
  pub seasons_url:     String,
  pub tribes_url:      String,
  /// Per-request timeout.
  pub timeout_secs:    u64,
}

impl Default for HttpConfig {
  fn default() -> Self {
    Self {
      contestants_url: format!("{BLOB_BASE}/contestants-Cq2cgR0IDa0z4RHHEoM20MprGmmOle.csv"),
      seasons_url:     format!("{BLOB_BASE}/seasons-yxTWJJtVFO7k8UwI7BSahBdmfMofsI.csv"),
      tribes_url:      format!("{BLOB_BASE}/tribes-meEsotSPJbIz9yArK03qBpC7B0QUR0.csv"),
      timeout_secs:    30,
    }
  }
}

/// Fetches each table with a plain `GET` on every read. Wrap it in a
/// [`crate::CachedSource`] for anything but one-off use.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpSource {
  client: Client,
  config: HttpConfig,
}

impl HttpSource {
  pub fn new(config: HttpConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()?;
    Ok(Self { client, config })
  }

  pub fn config(&self) -> &HttpConfig { &self.config }

  fn url(&self, collection: Collection) -> &str {
    match collection {
      Collection::Contestants => &self.config.contestants_url,
      Collection::Seasons => &self.config.seasons_url,
      Collection::Tribes => &self.config.tribes_url,
    }
  }

  /// `GET` the table's URL; any non-2xx status is an error.
  async fn fetch(&self, collection: Collection) -> Result<String> {
    let url = self.url(collection);
    tracing::debug!(%collection, url, "fetching table");

    let resp = self.client.get(url).send().await?;
    if !resp.status().is_success() {
      return Err(SourceError::Status { url: url.to_owned(), status: resp.status() });
    }
    Ok(resp.text().await?)
  }
}

impl DataSource for HttpSource {
  type Error = SourceError;

  async fn contestants(&self) -> Result<Arc<[Contestant]>> {
    let text = self.fetch(Collection::Contestants).await?;
    let rows = castaway_csv::parse_contestants(&text)
      .map_err(|source| SourceError::Csv { collection: Collection::Contestants, source })?;
    Ok(rows.into())
  }

  async fn seasons(&self) -> Result<Arc<[Season]>> {
    let text = self.fetch(Collection::Seasons).await?;
    let rows = castaway_csv::parse_seasons(&text)
      .map_err(|source| SourceError::Csv { collection: Collection::Seasons, source })?;
    Ok(rows.into())
  }

  async fn tribes(&self) -> Result<Arc<[Tribe]>> {
    let text = self.fetch(Collection::Tribes).await?;
    let rows = castaway_csv::parse_tribes(&text)
      .map_err(|source| SourceError::Csv { collection: Collection::Tribes, source })?;
    Ok(rows.into())
  }
}
