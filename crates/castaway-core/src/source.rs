//! The `DataSource` trait: the seam between where records come from and the
//! views computed over them.
//!
//! Implemented by `castaway-source` (HTTP, directory, in-memory, and the
//! expiring cache that wraps any of them). Views depend on this abstraction,
//! never on a concrete backend.

use std::{future::Future, sync::Arc};

use crate::record::{Contestant, Season, Tribe};

/// A provider of the three record collections.
///
/// Each read returns the whole collection; there is no paging or filtering
/// pushed to the source. Collections are shared and immutable, so handing
/// out an `Arc` is cheap and lets a cache return the same allocation to
/// every caller.
pub trait DataSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn contestants(
    &self,
  ) -> impl Future<Output = Result<Arc<[Contestant]>, Self::Error>> + Send + '_;

  fn seasons(
    &self,
  ) -> impl Future<Output = Result<Arc<[Season]>, Self::Error>> + Send + '_;

  fn tribes(
    &self,
  ) -> impl Future<Output = Result<Arc<[Tribe]>, Self::Error>> + Send + '_;
}
