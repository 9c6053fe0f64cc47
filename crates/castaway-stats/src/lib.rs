//! Aggregate statistics over the Castaway record collections.
//!
//! Every function here is pure and synchronous: it takes the full in-memory
//! collection (and sometimes a filter) and returns a serialisable summary.
//! Empty or malformed input produces empty or `None` output, never a panic.

pub mod ages;
pub mod compare;
pub mod contestant;
pub mod dashboard;
pub mod demographics;
pub mod rankings;
pub mod season;
pub mod states;
pub mod table;
pub mod tribes;

#[cfg(test)]
pub(crate) mod fixtures;

use serde::Serialize;

/// One named value in a chart series (a pie slice or a bar).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
  pub name:  String,
  pub value: usize,
}

impl Slice {
  pub fn new(name: impl Into<String>, value: usize) -> Self {
    Self { name: name.into(), value }
  }
}
