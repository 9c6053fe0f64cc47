//! The season selector shared by every season-scoped view.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, lenient};

/// Restricts a view to one season, or leaves it unrestricted.
///
/// Parsed from the `season` query parameter: `all` (or an empty value) is
/// [`SeasonFilter::All`], a whole number is [`SeasonFilter::Season`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SeasonFilter {
  #[default]
  All,
  Season(String),
}

impl SeasonFilter {
  /// Whether a record with join key `num_season` passes the filter.
  pub fn matches(&self, num_season: &str) -> bool {
    match self {
      Self::All => true,
      Self::Season(s) => s == num_season,
    }
  }

  pub fn is_all(&self) -> bool { matches!(self, Self::All) }
}

impl FromStr for SeasonFilter {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("all") {
      return Ok(Self::All);
    }
    // Normalise "07" and "7.0" to the "7" used as a join key.
    lenient::parse_count(s)
      .map(|n| Self::Season(n.to_string()))
      .ok_or_else(|| Error::InvalidSeasonFilter(s.to_owned()))
  }
}

impl fmt::Display for SeasonFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::All => f.write_str("all"),
      Self::Season(s) => f.write_str(s),
    }
  }
}

impl Serialize for SeasonFilter {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for SeasonFilter {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = lenient::text(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_all_and_numbers() {
    assert_eq!("all".parse::<SeasonFilter>().unwrap(), SeasonFilter::All);
    assert_eq!("".parse::<SeasonFilter>().unwrap(), SeasonFilter::All);
    assert_eq!(
      "07".parse::<SeasonFilter>().unwrap(),
      SeasonFilter::Season("7".into())
    );
    assert!("seven".parse::<SeasonFilter>().is_err());
  }

  #[test]
  fn matches_join_key() {
    let f = SeasonFilter::Season("12".into());
    assert!(f.matches("12"));
    assert!(!f.matches("1"));
    assert!(SeasonFilter::All.matches("anything"));
  }
}
