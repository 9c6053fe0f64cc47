//! Demographic breakdowns over contestants and seasons.

use std::collections::BTreeMap;

use castaway_core::{Contestant, Gender, Season};
use serde::Serialize;

use crate::Slice;

/// Headline counts across a contestant list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DemographicStats {
  pub male:             usize,
  pub female:           usize,
  pub non_binary:       usize,
  pub african_american: usize,
  pub asian_american:   usize,
  pub latin_american:   usize,
  pub poc:              usize,
  pub jewish:           usize,
  pub muslim:           usize,
  pub lgbt:             usize,
}

pub fn demographic_stats(contestants: &[Contestant]) -> DemographicStats {
  let mut stats = DemographicStats::default();
  for c in contestants {
    match c.gender() {
      Gender::Male => stats.male += 1,
      Gender::Female => stats.female += 1,
      Gender::NonBinary => stats.non_binary += 1,
      Gender::Unknown => {}
    }
    stats.african_american += usize::from(c.african_american);
    stats.asian_american += usize::from(c.asian_american);
    stats.latin_american += usize::from(c.latin_american);
    stats.poc += usize::from(c.poc);
    stats.jewish += usize::from(c.jewish);
    stats.muslim += usize::from(c.muslim);
    stats.lgbt += usize::from(c.lgbt);
  }
  stats
}

/// Pie slices for Male / Female / Non-Binary. Unknown codes are not counted.
pub fn gender_breakdown(contestants: &[Contestant]) -> Vec<Slice> {
  let stats = demographic_stats(contestants);
  vec![
    Slice::new(Gender::Male.label(), stats.male),
    Slice::new(Gender::Female.label(), stats.female),
    Slice::new(Gender::NonBinary.label(), stats.non_binary),
  ]
}

/// Pie slices where every contestant lands in exactly one category, checked
/// in order: African American, Asian American, Latin American, Other POC,
/// White.
pub fn ethnicity_breakdown(contestants: &[Contestant]) -> Vec<Slice> {
  let mut counts = [0usize; 5];
  for c in contestants {
    let idx = if c.african_american {
      0
    } else if c.asian_american {
      1
    } else if c.latin_american {
      2
    } else if c.poc {
      3
    } else {
      4
    };
    counts[idx] += 1;
  }
  ["African American", "Asian American", "Latin American", "Other POC", "White"]
    .into_iter()
    .zip(counts)
    .map(|(name, value)| Slice::new(name, value))
    .collect()
}

/// Contestant counts per country; an empty country is reported as
/// `"Unknown"`.
pub fn contestants_by_country(contestants: &[Contestant]) -> BTreeMap<String, usize> {
  let mut counts = BTreeMap::new();
  for c in contestants {
    let country = match c.country.trim() {
      "" => "Unknown",
      other => other,
    };
    *counts.entry(country.to_owned()).or_default() += 1;
  }
  counts
}

/// Per-season demographic counts as stored in the season table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonDemographics {
  /// Chart label, `S<number>`.
  pub season:           String,
  pub season_name:      String,
  pub african_american: u32,
  pub asian_american:   u32,
  pub latin_american:   u32,
  pub poc:              u32,
  pub lgbt:             u32,
}

pub fn season_demographics(seasons: &[Season]) -> Vec<SeasonDemographics> {
  seasons
    .iter()
    .map(|s| SeasonDemographics {
      season:           format!("S{}", s.num_season),
      season_name:      s.season.clone(),
      african_american: s.african_american.unwrap_or(0),
      asian_american:   s.asian_american.unwrap_or(0),
      latin_american:   s.latin_american.unwrap_or(0),
      poc:              s.poc.unwrap_or(0),
      lgbt:             s.lgbt.unwrap_or(0),
    })
    .collect()
}
