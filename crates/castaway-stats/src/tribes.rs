//! Lookups by season and name, and the tribe composition chart.

use castaway_core::{Contestant, Season, SeasonFilter, Tribe};
use serde::Serialize;

// ─── Lookups ─────────────────────────────────────────────────────────────────

pub fn tribes_for_season<'a>(tribes: &'a [Tribe], num_season: &str) -> Vec<&'a Tribe> {
  tribes.iter().filter(|t| t.num_season == num_season).collect()
}

pub fn contestants_for_season<'a>(
  contestants: &'a [Contestant],
  num_season: &str,
) -> Vec<&'a Contestant> {
  contestants
    .iter()
    .filter(|c| c.num_season == num_season)
    .collect()
}

/// First contestant whose name matches, ignoring case. `name` must already
/// be percent-decoded.
pub fn contestant_by_name<'a>(contestants: &'a [Contestant], name: &str) -> Option<&'a Contestant> {
  let name = name.to_lowercase();
  contestants
    .iter()
    .find(|c| c.contestant_name.to_lowercase() == name)
}

/// Every appearance of the named contestant, ignoring case.
pub fn contestant_seasons<'a>(contestants: &'a [Contestant], name: &str) -> Vec<&'a Contestant> {
  let name = name.to_lowercase();
  contestants
    .iter()
    .filter(|c| c.contestant_name.to_lowercase() == name)
    .collect()
}

pub fn season_by_number<'a>(seasons: &'a [Season], num_season: &str) -> Option<&'a Season> {
  seasons.iter().find(|s| s.num_season == num_season)
}

// ─── Composition ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TribeComposition {
  pub tribe:      String,
  /// Chart label, `S<number>`.
  pub season:     String,
  pub male:       u32,
  pub female:     u32,
  pub non_binary: u32,
  pub poc:        u32,
  pub lgbt:       u32,
  pub total:      Option<u32>,
}

/// Gender and demographic makeup of every non-merge tribe passing `filter`.
pub fn tribe_composition(tribes: &[Tribe], filter: &SeasonFilter) -> Vec<TribeComposition> {
  tribes
    .iter()
    .filter(|t| !t.merge && filter.matches(&t.num_season))
    .map(|t| TribeComposition {
      tribe:      t.tribe.clone(),
      season:     format!("S{}", t.num_season),
      male:       t.male.unwrap_or(0),
      female:     t.female.unwrap_or(0),
      non_binary: t.non_binary.unwrap_or(0),
      poc:        t.poc.unwrap_or(0),
      lgbt:       t.lgbt.unwrap_or(0),
      total:      t.num_contestants,
    })
    .collect()
}

// ─── Colours ─────────────────────────────────────────────────────────────────

/// Fallback for buff colours the palette doesn't know.
pub const DEFAULT_TRIBE_COLOR: &str = "#a0aec0";

const TRIBE_COLORS: &[(&str, &str)] = &[
  ("Red", "#e53e3e"),
  ("Blue", "#3182ce"),
  ("Green", "#38a169"),
  ("Yellow", "#ecc94b"),
  ("Orange", "#dd6b20"),
  ("Purple", "#805ad5"),
  ("Black", "#2d3748"),
  ("White", "#e2e8f0"),
  ("Pink", "#ed64a6"),
  ("Brown", "#8b4513"),
  ("Teal", "#319795"),
  ("Cyan", "#0bc5ea"),
];

/// Hex swatch for a named buff colour.
pub fn tribe_color_hex(color: &str) -> &'static str {
  let color = color.trim();
  TRIBE_COLORS
    .iter()
    .find(|(name, _)| name.eq_ignore_ascii_case(color))
    .map_or(DEFAULT_TRIBE_COLOR, |(_, hex)| hex)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fixtures::{cast, seasons, tribe};

  #[test]
  fn name_lookup_ignores_case() {
    let people = cast();
    let hatch = contestant_by_name(&people, "richard HATCH").unwrap();
    assert_eq!(hatch.num_season, "1");
    assert_eq!(contestant_seasons(&people, "Richard Hatch").len(), 2);
    assert!(contestant_by_name(&people, "Jeff Probst").is_none());
  }

  #[test]
  fn season_lookups() {
    assert_eq!(contestants_for_season(&cast(), "2").len(), 2);
    assert_eq!(season_by_number(&seasons(), "2").unwrap().season, "The Australian Outback");
    assert!(season_by_number(&seasons(), "99").is_none());

    let tribes = vec![tribe("1", "Pagong", false), tribe("2", "Kucha", false)];
    assert_eq!(tribes_for_season(&tribes, "1")[0].tribe, "Pagong");
  }

  #[test]
  fn composition_skips_merged_tribes() {
    let mut tribes = vec![
      tribe("1", "Pagong", false),
      tribe("1", "Tagi", false),
      tribe("1", "Rattana", true),
      tribe("2", "Kucha", false),
    ];
    tribes[0].male = Some(4);
    tribes[0].num_contestants = Some(8);

    let all = tribe_composition(&tribes, &SeasonFilter::All);
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].season, "S1");
    assert_eq!(all[0].male, 4);
    assert_eq!(all[0].total, Some(8));

    let one = tribe_composition(&tribes, &SeasonFilter::Season("2".into()));
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].tribe, "Kucha");
  }

  #[test]
  fn colors_fall_back_to_grey() {
    assert_eq!(tribe_color_hex("Red"), "#e53e3e");
    assert_eq!(tribe_color_hex("teal"), "#319795");
    assert_eq!(tribe_color_hex("Chartreuse"), DEFAULT_TRIBE_COLOR);
    assert_eq!(tribe_color_hex(""), DEFAULT_TRIBE_COLOR);
  }
}
