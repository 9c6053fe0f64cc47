//! [`CachedSource`]: an expiring in-memory copy of each collection.

use std::{
  future::Future,
  sync::{Arc, Mutex, PoisonError},
  time::Duration,
};

use castaway_core::{Contestant, DataSource, Season, Tribe};
use tokio::time::Instant;

use crate::Collection;

/// How long a fetched collection is served before it is fetched again.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

struct Entry<T> {
  data:       Arc<[T]>,
  fetched_at: Instant,
}

/// One collection's cached copy. The lock is only held to read or replace
/// the entry, never across a fetch.
struct Slot<T>(Mutex<Option<Entry<T>>>);

impl<T> Slot<T> {
  fn empty() -> Self { Self(Mutex::new(None)) }

  fn fresh(&self, ttl: Duration) -> Option<Arc<[T]>> {
    let entry = self.0.lock().unwrap_or_else(PoisonError::into_inner);
    entry
      .as_ref()
      .filter(|e| e.fetched_at.elapsed() <= ttl)
      .map(|e| Arc::clone(&e.data))
  }

  fn store(&self, data: Arc<[T]>) {
    let mut entry = self.0.lock().unwrap_or_else(PoisonError::into_inner);
    *entry = Some(Entry { data, fetched_at: Instant::now() });
  }

  fn clear(&self) {
    self.0.lock().unwrap_or_else(PoisonError::into_inner).take();
  }
}

/// Wraps a [`DataSource`] and serves each collection from memory until it is
/// strictly older than the TTL.
///
/// An expired or empty slot is refilled from the inner source on the next
/// read. Concurrent readers of an expired slot each fetch; the last one to
/// finish wins. A failed fetch leaves the previous copy in place (still
/// expired) and returns the error.
pub struct CachedSource<S> {
  inner:       S,
  ttl:         Duration,
  contestants: Slot<Contestant>,
  seasons:     Slot<Season>,
  tribes:      Slot<Tribe>,
}

impl<S: DataSource> CachedSource<S> {
  /// Cache with the default five-minute expiry.
  pub fn new(inner: S) -> Self { Self::with_ttl(inner, DEFAULT_TTL) }

  pub fn with_ttl(inner: S, ttl: Duration) -> Self {
    Self {
      inner,
      ttl,
      contestants: Slot::empty(),
      seasons: Slot::empty(),
      tribes: Slot::empty(),
    }
  }

  pub fn inner(&self) -> &S { &self.inner }

  pub fn ttl(&self) -> Duration { self.ttl }

  /// Drop all three cached collections; the next read of each refetches.
  pub fn clear(&self) {
    self.contestants.clear();
    self.seasons.clear();
    self.tribes.clear();
    tracing::info!("cache cleared");
  }

  async fn read<T, F>(
    &self,
    collection: Collection,
    slot: &Slot<T>,
    fetch: F,
  ) -> Result<Arc<[T]>, S::Error>
  where
    F: Future<Output = Result<Arc<[T]>, S::Error>>,
  {
    if let Some(data) = slot.fresh(self.ttl) {
      tracing::debug!(%collection, "cache hit");
      return Ok(data);
    }

    match fetch.await {
      Ok(data) => {
        tracing::info!(%collection, rows = data.len(), "fetched collection");
        slot.store(Arc::clone(&data));
        Ok(data)
      }
      Err(e) => {
        tracing::warn!(%collection, error = %e, "fetch failed; keeping previous copy");
        Err(e)
      }
    }
  }
}

impl<S: DataSource> DataSource for CachedSource<S> {
  type Error = S::Error;

  async fn contestants(&self) -> Result<Arc<[Contestant]>, S::Error> {
    self
      .read(Collection::Contestants, &self.contestants, self.inner.contestants())
      .await
  }

  async fn seasons(&self) -> Result<Arc<[Season]>, S::Error> {
    self
      .read(Collection::Seasons, &self.seasons, self.inner.seasons())
      .await
  }

  async fn tribes(&self) -> Result<Arc<[Tribe]>, S::Error> {
    self
      .read(Collection::Tribes, &self.tribes, self.inner.tribes())
      .await
  }
}
