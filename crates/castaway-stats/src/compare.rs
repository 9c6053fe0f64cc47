//! Side-by-side comparison series for chosen contestants or seasons.

use std::str::FromStr;

use castaway_core::{Contestant, Error, Season};
use serde::Serialize;

/// One labelled value in a comparison entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricValue {
  pub label: &'static str,
  pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
  /// Contestant name, or `S<number>` for seasons.
  pub name:   String,
  /// The contestant's season; absent for season comparisons.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub season: Option<String>,
  pub values: Vec<MetricValue>,
}

// ─── Contestants ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContestantMetric {
  #[default]
  Finish,
  VotesAgainst,
  /// `normalized_finish` scaled to 0-100.
  NormalizedFinish,
  Age,
}

impl FromStr for ContestantMetric {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "finish" => Ok(Self::Finish),
      "votes_against" | "votesAgainst" => Ok(Self::VotesAgainst),
      "normalized_finish" | "normalizedFinish" => Ok(Self::NormalizedFinish),
      "age" => Ok(Self::Age),
      other => Err(Error::UnknownMetric(other.to_owned())),
    }
  }
}

impl ContestantMetric {
  fn label(self) -> &'static str {
    match self {
      Self::Finish => "Finish",
      Self::VotesAgainst => "Votes Against",
      Self::NormalizedFinish => "Normalized Finish",
      Self::Age => "Age",
    }
  }

  fn value(self, c: &Contestant) -> Option<f64> {
    match self {
      Self::Finish => c.finish.map(f64::from),
      Self::VotesAgainst => c.votes_against.map(f64::from),
      Self::NormalizedFinish => c.normalized_finish.map(|f| f * 100.0),
      Self::Age => c.age.map(f64::from),
    }
  }
}

/// Every appearance of each named contestant, in table order. Names match
/// exactly; a returning player yields one entry per season.
pub fn compare_contestants<S: AsRef<str>>(
  contestants: &[Contestant],
  names: &[S],
  metric: ContestantMetric,
) -> Vec<Comparison> {
  contestants
    .iter()
    .filter(|c| names.iter().any(|n| n.as_ref() == c.contestant_name))
    .map(|c| Comparison {
      name:   c.contestant_name.clone(),
      season: Some(c.num_season.clone()),
      values: vec![MetricValue { label: metric.label(), value: metric.value(c) }],
    })
    .collect()
}

// ─── Seasons ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeasonMetric {
  #[default]
  Contestants,
  Days,
  Merge,
  Jury,
  /// Several series at once: the season's demographic counts.
  Demographics,
}

impl FromStr for SeasonMetric {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "contestants" => Ok(Self::Contestants),
      "days" => Ok(Self::Days),
      "merge" => Ok(Self::Merge),
      "jury" => Ok(Self::Jury),
      "demographics" => Ok(Self::Demographics),
      other => Err(Error::UnknownMetric(other.to_owned())),
    }
  }
}

impl SeasonMetric {
  fn values(self, s: &Season) -> Vec<MetricValue> {
    let v = |label, count: Option<u32>| MetricValue { label, value: count.map(f64::from) };
    match self {
      Self::Contestants => vec![v("Contestants", s.num_contestants)],
      Self::Days => vec![v("Days", s.num_days)],
      Self::Merge => vec![v("Merge", s.num_merge)],
      Self::Jury => vec![v("Jury", s.num_jury)],
      Self::Demographics => vec![
        v("African American", s.african_american),
        v("Asian American", s.asian_american),
        v("Latin American", s.latin_american),
        v("Total POC", s.poc),
        v("LGBT", s.lgbt),
      ],
    }
  }
}

/// The chosen seasons in table order, labelled `S<number>`.
pub fn compare_seasons<S: AsRef<str>>(
  seasons: &[Season],
  numbers: &[S],
  metric: SeasonMetric,
) -> Vec<Comparison> {
  seasons
    .iter()
    .filter(|s| numbers.iter().any(|n| n.as_ref() == s.num_season))
    .map(|s| Comparison {
      name:   format!("S{}", s.num_season),
      season: None,
      values: metric.values(s),
    })
    .collect()
}
