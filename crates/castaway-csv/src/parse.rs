//! Header-driven table decoding.
//!
//! Pipeline:
//!   raw &str
//!     └─ csv::Reader (trimmed, flexible) → StringRecord
//!          └─ skip blank records, pad short ones
//!               └─ StringRecord::deserialize(headers) → T

use castaway_core::Contestant;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Decode every non-blank row of `input` into `T`, keyed by the header row.
///
/// Rows may be shorter or longer than the header; missing cells take the
/// field's default and extra cells are ignored.
pub(crate) fn parse_table<T: DeserializeOwned>(input: &str) -> Result<Vec<T>> {
  let input = input.trim_start_matches('\u{feff}');
  let mut reader = ReaderBuilder::new()
    .trim(Trim::All)
    .flexible(true)
    .from_reader(input.as_bytes());

  let headers = reader.headers()?.clone();
  if is_blank(&headers) {
    return Err(Error::MissingHeader);
  }

  let mut rows = Vec::new();
  for record in reader.records() {
    let mut record = record?;
    if is_blank(&record) {
      continue;
    }
    // The deserializer stops at the last header but errors on a short row.
    while record.len() < headers.len() {
      record.push_field("");
    }
    let line = record.position().map(|p| p.line()).unwrap_or_default();
    let row = record
      .deserialize(Some(&headers))
      .map_err(|source| Error::Row { line, source })?;
    rows.push(row);
  }
  Ok(rows)
}

fn is_blank(record: &StringRecord) -> bool {
  record.iter().all(|field| field.trim().is_empty())
}

/// Fill `city` and `homestate` from a `"City, ST"` hometown.
///
/// A hometown with no comma yields the whole string as the city and an empty
/// state; an empty hometown yields empty strings for both.
pub(crate) fn split_hometown(contestant: &mut Contestant) {
  let mut parts = contestant.hometown.split(',').map(str::trim);
  contestant.city = parts.next().unwrap_or_default().to_owned();
  contestant.homestate = parts.next().unwrap_or_default().to_owned();
}
