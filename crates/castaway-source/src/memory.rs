//! [`MemorySource`]: fixed collections held in memory.

use std::{convert::Infallible, sync::Arc};

use castaway_core::{Contestant, DataSource, Season, Tribe};

/// Serves the collections it was built with. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
  contestants: Arc<[Contestant]>,
  seasons:     Arc<[Season]>,
  tribes:      Arc<[Tribe]>,
}

impl MemorySource {
  pub fn new(contestants: Vec<Contestant>, seasons: Vec<Season>, tribes: Vec<Tribe>) -> Self {
    Self {
      contestants: contestants.into(),
      seasons:     seasons.into(),
      tribes:      tribes.into(),
    }
  }
}

impl DataSource for MemorySource {
  type Error = Infallible;

  async fn contestants(&self) -> Result<Arc<[Contestant]>, Infallible> {
    Ok(Arc::clone(&self.contestants))
  }

  async fn seasons(&self) -> Result<Arc<[Season]>, Infallible> { Ok(Arc::clone(&self.seasons)) }

  async fn tribes(&self) -> Result<Arc<[Tribe]>, Infallible> { Ok(Arc::clone(&self.tribes)) }
}
