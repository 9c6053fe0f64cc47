//! Record types: the three flat tables every view is built from.
//!
//! Records are decoded once from the source tables and never mutated. The
//! season number is a free-text join key shared by all three kinds; no
//! relationship between them is enforced.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::lenient;

// ─── Gender ──────────────────────────────────────────────────────────────────

/// Gender as encoded in the contestant table (`M`, `F`, `N`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
  Male,
  Female,
  NonBinary,
  Unknown,
}

impl Gender {
  pub fn from_code(code: &str) -> Self {
    match code.trim() {
      "M" | "m" => Self::Male,
      "F" | "f" => Self::Female,
      "N" | "n" => Self::NonBinary,
      _ => Self::Unknown,
    }
  }

  /// Human-readable label used by chart legends.
  pub fn label(self) -> &'static str {
    match self {
      Self::Male => "Male",
      Self::Female => "Female",
      Self::NonBinary => "Non-Binary",
      Self::Unknown => "Unknown",
    }
  }
}

// ─── Contestant ──────────────────────────────────────────────────────────────

/// One contestant's appearance in one season. Returning players have one
/// record per appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contestant {
  pub contestant_name:   String,
  #[serde(deserialize_with = "lenient::count")]
  pub age:               Option<u32>,
  #[serde(deserialize_with = "lenient::date")]
  pub birthdate:         Option<NaiveDate>,
  /// Raw `"City, ST"` string as it appears in the source.
  pub hometown:          String,
  /// Derived from `hometown` by the codec.
  pub city:              String,
  /// Derived from `hometown` by the codec; abbreviation or full state name.
  pub homestate:         String,
  pub state:             String,
  pub country:           String,
  pub profession:        String,
  /// Raw gender code; see [`Contestant::gender`].
  #[serde(rename = "gender")]
  pub gender_code:       String,

  #[serde(deserialize_with = "lenient::flag")]
  pub african_american:  bool,
  #[serde(deserialize_with = "lenient::flag")]
  pub asian_american:    bool,
  #[serde(deserialize_with = "lenient::flag")]
  pub latin_american:    bool,
  #[serde(deserialize_with = "lenient::flag")]
  pub poc:               bool,
  #[serde(deserialize_with = "lenient::flag")]
  pub jewish:            bool,
  #[serde(deserialize_with = "lenient::flag")]
  pub muslim:            bool,
  #[serde(deserialize_with = "lenient::flag")]
  pub lgbt:              bool,

  #[serde(deserialize_with = "lenient::text")]
  pub num_season:        String,
  #[serde(deserialize_with = "lenient::count")]
  pub num_appearance:    Option<u32>,
  /// Finishing position within the season; `1` is the winner.
  #[serde(deserialize_with = "lenient::count")]
  pub finish:            Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub num_boot:          Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub votes_against:     Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub num_jury_votes:    Option<u32>,

  #[serde(deserialize_with = "lenient::flag")]
  pub merge:             bool,
  #[serde(deserialize_with = "lenient::flag")]
  pub jury:              bool,
  /// Reached final tribal council.
  #[serde(deserialize_with = "lenient::flag")]
  pub ftc:               bool,
  #[serde(deserialize_with = "lenient::flag")]
  pub quit:              bool,
  #[serde(deserialize_with = "lenient::flag")]
  pub evac:              bool,
  #[serde(deserialize_with = "lenient::flag")]
  pub ejected:           bool,
  /// Competed in a fire-making challenge.
  #[serde(deserialize_with = "lenient::flag")]
  pub fmc:               bool,

  pub tribe1:            String,
  pub tribe2:            String,
  pub tribe3:            String,
  /// Finish expressed as a 0–1 percentile within the season.
  #[serde(deserialize_with = "lenient::ratio")]
  pub normalized_finish: Option<f64>,
}

impl Contestant {
  /// `finish == 1` is the only encoding of a win.
  pub fn is_winner(&self) -> bool { self.finish == Some(1) }

  pub fn gender(&self) -> Gender { Gender::from_code(&self.gender_code) }

  /// Age with unparsable values counted as zero.
  pub fn age_or_zero(&self) -> u32 { self.age.unwrap_or(0) }

  pub fn votes_against_or_zero(&self) -> u32 {
    self.votes_against.unwrap_or(0)
  }

  /// Non-empty tribe names in assignment order.
  pub fn tribes(&self) -> impl Iterator<Item = &str> {
    [&self.tribe1, &self.tribe2, &self.tribe3]
      .into_iter()
      .map(|t| t.as_str())
      .filter(|t| !t.is_empty())
  }
}

// ─── Season ──────────────────────────────────────────────────────────────────

/// One season, with structural facts and demographic aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Season {
  #[serde(deserialize_with = "lenient::text")]
  pub num_season:         String,
  /// Display name, e.g. "Borneo".
  pub season:             String,
  pub merged_tribe:       String,
  #[serde(deserialize_with = "lenient::count")]
  pub num_contestants:    Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub num_days:           Option<u32>,
  /// Number of players at the merge.
  #[serde(deserialize_with = "lenient::count")]
  pub num_merge:          Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub day_merge:          Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub num_jury:           Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub num_ftc:            Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub num_swaps:          Option<u32>,

  #[serde(deserialize_with = "lenient::flag")]
  pub redemption_island:  bool,
  #[serde(deserialize_with = "lenient::flag")]
  pub edge_of_extinction: bool,
  #[serde(deserialize_with = "lenient::count")]
  pub num_quits:          Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub num_evacs:          Option<u32>,

  #[serde(deserialize_with = "lenient::count")]
  pub african_american:   Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub asian_american:     Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub latin_american:     Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub poc:                Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub lgbt:               Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub jewish:             Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub muslim:             Option<u32>,

  pub winner:             String,
}

impl Season {
  /// The season number as an integer, for ordering.
  pub fn number(&self) -> Option<u32> { lenient::parse_count(&self.num_season) }
}

// ─── Tribe ───────────────────────────────────────────────────────────────────

/// A tribe as it existed in one season (starting, swapped, or merged).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tribe {
  #[serde(deserialize_with = "lenient::text")]
  pub num_season:       String,
  pub tribe:            String,
  /// Iteration of the tribe within the season (1 = starting tribes).
  #[serde(deserialize_with = "lenient::count")]
  pub iter_num:         Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub num_contestants:  Option<u32>,
  /// Set for the merged tribe.
  #[serde(deserialize_with = "lenient::flag")]
  pub merge:            bool,

  #[serde(deserialize_with = "lenient::count")]
  pub african_american: Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub asian_american:   Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub latin_american:   Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub poc:              Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub jewish:           Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub muslim:           Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub lgbt:             Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub male:             Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub female:           Option<u32>,
  #[serde(deserialize_with = "lenient::count")]
  pub non_binary:       Option<u32>,

  pub color:            String,
}
