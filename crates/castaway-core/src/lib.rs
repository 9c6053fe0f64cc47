//! Core record types and trait definitions for the Castaway statistics
//! service.
//!
//! This crate is free of HTTP and CSV dependencies. Every other crate in the
//! workspace depends on it.

pub mod error;
pub mod filter;
pub mod lenient;
pub mod record;
pub mod source;

pub use error::{Error, Result};
pub use filter::SeasonFilter;
pub use record::{Contestant, Gender, Season, Tribe};
pub use source::DataSource;
