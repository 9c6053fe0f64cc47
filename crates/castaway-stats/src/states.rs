//! Contestant counts per US state, for the map view.

use castaway_core::Contestant;
use serde::Serialize;

/// `(abbreviation, name)` for every state plus DC, in alphabetical order of
/// abbreviation.
pub const US_STATES: &[(&str, &str)] = &[
  ("AK", "Alaska"),
  ("AL", "Alabama"),
  ("AR", "Arkansas"),
  ("AZ", "Arizona"),
  ("CA", "California"),
  ("CO", "Colorado"),
  ("CT", "Connecticut"),
  ("DC", "District of Columbia"),
  ("DE", "Delaware"),
  ("FL", "Florida"),
  ("GA", "Georgia"),
  ("HI", "Hawaii"),
  ("IA", "Iowa"),
  ("ID", "Idaho"),
  ("IL", "Illinois"),
  ("IN", "Indiana"),
  ("KS", "Kansas"),
  ("KY", "Kentucky"),
  ("LA", "Louisiana"),
  ("MA", "Massachusetts"),
  ("MD", "Maryland"),
  ("ME", "Maine"),
  ("MI", "Michigan"),
  ("MN", "Minnesota"),
  ("MO", "Missouri"),
  ("MS", "Mississippi"),
  ("MT", "Montana"),
  ("NC", "North Carolina"),
  ("ND", "North Dakota"),
  ("NE", "Nebraska"),
  ("NH", "New Hampshire"),
  ("NJ", "New Jersey"),
  ("NM", "New Mexico"),
  ("NV", "Nevada"),
  ("NY", "New York"),
  ("OH", "Ohio"),
  ("OK", "Oklahoma"),
  ("OR", "Oregon"),
  ("PA", "Pennsylvania"),
  ("RI", "Rhode Island"),
  ("SC", "South Carolina"),
  ("SD", "South Dakota"),
  ("TN", "Tennessee"),
  ("TX", "Texas"),
  ("UT", "Utah"),
  ("VA", "Virginia"),
  ("VT", "Vermont"),
  ("WA", "Washington"),
  ("WI", "Wisconsin"),
  ("WV", "West Virginia"),
  ("WY", "Wyoming"),
];

/// Resolve a free-text state ("CA", "ca", "California") to its index in
/// [`US_STATES`].
fn state_index(raw: &str) -> Option<usize> {
  let raw = raw.trim();
  if raw.len() == 2 {
    US_STATES
      .iter()
      .position(|(abbr, _)| abbr.eq_ignore_ascii_case(raw))
  } else {
    US_STATES
      .iter()
      .position(|(_, name)| name.eq_ignore_ascii_case(raw))
  }
}

/// Normalise a free-text state to its two-letter abbreviation.
pub fn state_abbreviation(raw: &str) -> Option<&'static str> {
  state_index(raw).map(|i| US_STATES[i].0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateCount {
  pub abbreviation: &'static str,
  pub name:         &'static str,
  pub count:        usize,
  pub contestants:  Vec<String>,
  /// Shading for the map, `clamp(count / max, 0.2, 0.9)`; `None` when the
  /// state has no contestants.
  pub intensity:    Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateDistribution {
  /// Every state, including those with no contestants.
  pub states:    Vec<StateCount>,
  pub max_count: usize,
}

/// Count contestants by `homestate`. Rows whose state cannot be matched to
/// a US state are skipped.
pub fn state_distribution(contestants: &[Contestant]) -> StateDistribution {
  let mut states: Vec<StateCount> = US_STATES
    .iter()
    .map(|&(abbreviation, name)| StateCount {
      abbreviation,
      name,
      count: 0,
      contestants: Vec::new(),
      intensity: None,
    })
    .collect();

  for c in contestants {
    if let Some(idx) = state_index(&c.homestate) {
      states[idx].count += 1;
      states[idx].contestants.push(c.contestant_name.clone());
    }
  }

  let max_count = states.iter().map(|s| s.count).max().unwrap_or(0);
  for state in &mut states {
    if state.count > 0 {
      let ratio = state.count as f64 / max_count as f64;
      state.intensity = Some(ratio.clamp(0.2, 0.9));
    }
  }

  StateDistribution { states, max_count }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fixtures::cast;

  #[test]
  fn abbreviations_and_names_both_resolve() {
    assert_eq!(state_abbreviation("ca"), Some("CA"));
    assert_eq!(state_abbreviation("Virginia"), Some("VA"));
    assert_eq!(state_abbreviation(" new york "), Some("NY"));
    assert_eq!(state_abbreviation("Ontario"), None);
    assert_eq!(state_abbreviation("XX"), None);
  }

  #[test]
  fn distribution_counts_every_state() {
    let mut people = cast();
    people.push(Contestant {
      contestant_name: "Nowhere".into(),
      homestate: "Narnia".into(),
      ..Default::default()
    });

    let dist = state_distribution(&people);
    assert_eq!(dist.states.len(), US_STATES.len());
    assert_eq!(dist.max_count, 2);

    let ri = dist.states.iter().find(|s| s.abbreviation == "RI").unwrap();
    assert_eq!(ri.count, 2);
    assert_eq!(ri.intensity, Some(0.9));

    let va = dist.states.iter().find(|s| s.abbreviation == "VA").unwrap();
    assert_eq!(va.contestants, vec!["Rudy Boesch".to_string()]);
    assert_eq!(va.intensity, Some(0.5));

    let wy = dist.states.iter().find(|s| s.abbreviation == "WY").unwrap();
    assert_eq!(wy.count, 0);
    assert_eq!(wy.intensity, None);

    let total: usize = dist.states.iter().map(|s| s.count).sum();
    assert_eq!(total, 6);
  }
}
