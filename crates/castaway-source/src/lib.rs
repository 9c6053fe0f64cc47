//! Record sources for the Castaway service.
//!
//! Every type here implements [`castaway_core::DataSource`]:
//!
//! - [`HttpSource`] fetches the three CSV tables from remote storage.
//! - [`DirSource`] reads them from a local directory.
//! - [`MemorySource`] serves preloaded collections.
//! - [`CachedSource`] wraps any of the above and keeps each collection in
//!   memory until it expires.

mod cache;
mod dir;
mod http;
mod memory;

pub mod error;

pub use cache::{CachedSource, DEFAULT_TTL};
pub use dir::DirSource;
pub use error::{Collection, Result, SourceError};
pub use http::{HttpConfig, HttpSource};
pub use memory::MemorySource;

#[cfg(test)]
mod tests;
