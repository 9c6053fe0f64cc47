//! CSV codec for the Castaway source tables.
//!
//! Converts the three upstream tables into [`castaway_core`] records. Pure
//! synchronous; no HTTP dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! let csv = "contestant_name,age,hometown,num_season,finish\n\
//!            Richard Hatch,39,\"Newport, RI\",1,1\n";
//! let contestants = castaway_csv::parse_contestants(csv).unwrap();
//! assert_eq!(contestants[0].city, "Newport");
//! ```

pub mod error;
mod parse;

use castaway_core::{Contestant, Season, Tribe};

pub use error::{Error, Result};

/// Decode the contestant table and derive `city` / `homestate` from each
/// row's `hometown`.
pub fn parse_contestants(input: &str) -> Result<Vec<Contestant>> {
  let mut rows: Vec<Contestant> = parse::parse_table(input)?;
  for row in &mut rows {
    parse::split_hometown(row);
  }
  Ok(rows)
}

/// Decode the season table.
pub fn parse_seasons(input: &str) -> Result<Vec<Season>> {
  parse::parse_table(input)
}

/// Decode the tribe table.
pub fn parse_tribes(input: &str) -> Result<Vec<Tribe>> {
  parse::parse_table(input)
}
