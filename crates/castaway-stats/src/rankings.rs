//! Frequency rankings and per-season placement.

use std::collections::HashMap;

use castaway_core::Contestant;
use serde::Serialize;

// ─── Tally ───────────────────────────────────────────────────────────────────

/// Insertion-ordered counter. Sorting its output with a stable sort gives
/// "count descending, ties by first-encountered order".
struct Tally<V> {
  index:   HashMap<String, usize>,
  entries: Vec<(String, usize, V)>,
}

impl<V: Default> Tally<V> {
  fn new() -> Self {
    Self { index: HashMap::new(), entries: Vec::new() }
  }

  /// Increment `key` and return its payload for the caller to update.
  fn bump(&mut self, key: &str) -> &mut V {
    let idx = match self.index.get(key) {
      Some(&idx) => idx,
      None => {
        self.index.insert(key.to_owned(), self.entries.len());
        self.entries.push((key.to_owned(), 0, V::default()));
        self.entries.len() - 1
      }
    };
    let entry = &mut self.entries[idx];
    entry.1 += 1;
    &mut entry.2
  }

  /// Entries sorted by count descending (stable), truncated to `n`.
  fn top(mut self, n: usize) -> Vec<(String, usize, V)> {
    self.entries.sort_by(|a, b| b.1.cmp(&a.1));
    self.entries.truncate(n);
    self.entries
  }

  /// The most frequent entry; the first encountered wins ties.
  fn leader(self) -> Option<(String, usize)> {
    self.top(1).into_iter().next().map(|(k, n, _)| (k, n))
  }
}

// ─── Professions ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfessionCount {
  pub profession: String,
  pub count:      usize,
}

/// Placeholder values that say nothing about the profession.
const SKIPPED_PROFESSIONS: &[&str] = &["n/a", "unknown"];

/// The `n` most common professions. Names are compared trimmed and
/// lowercased, and reported with the first letter capitalised.
pub fn top_professions(contestants: &[Contestant], n: usize) -> Vec<ProfessionCount> {
  let mut tally: Tally<()> = Tally::new();
  for c in contestants {
    let normalized = c.profession.trim().to_lowercase();
    if normalized.is_empty() || SKIPPED_PROFESSIONS.contains(&normalized.as_str()) {
      continue;
    }
    tally.bump(&normalized);
  }
  tally
    .top(n)
    .into_iter()
    .map(|(profession, count, ())| ProfessionCount {
      profession: capitalize(&profession),
      count,
    })
    .collect()
}

fn capitalize(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

// ─── Winners ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinnerCount {
  pub name:    String,
  pub wins:    usize,
  /// Seasons won, in table order.
  pub seasons: Vec<String>,
}

/// The `n` players with the most wins.
pub fn top_winners(contestants: &[Contestant], n: usize) -> Vec<WinnerCount> {
  let mut tally: Tally<Vec<String>> = Tally::new();
  for c in contestants.iter().filter(|c| c.is_winner()) {
    tally.bump(&c.contestant_name).push(c.num_season.clone());
  }
  tally
    .top(n)
    .into_iter()
    .map(|(name, wins, seasons)| WinnerCount { name, wins, seasons })
    .collect()
}

// ─── Season rank ─────────────────────────────────────────────────────────────

/// One plus the number of same-season contestants whose finish value is
/// strictly higher than `contestant`'s.
///
/// Rank 1 therefore belongs to the first player out, and the winner ranks
/// last. Contestants without a finish value are never counted as higher;
/// if `contestant` has none, every same-season contestant with a finish is.
pub fn season_rank(contestant: &Contestant, all: &[Contestant]) -> usize {
  let higher = all
    .iter()
    .filter(|c| c.num_season == contestant.num_season)
    .filter(|c| match (c.finish, contestant.finish) {
      (Some(theirs), Some(mine)) => theirs > mine,
      (Some(_), None) => true,
      (None, _) => false,
    })
    .count();
  higher + 1
}

// ─── Superlatives ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedAge {
  pub name: String,
  pub age:  u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedCount {
  pub name:  String,
  pub count: usize,
}

/// Record-holders across the whole contestant table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Superlatives {
  pub oldest:            Option<NamedAge>,
  pub youngest:          Option<NamedAge>,
  pub most_appearances:  Option<NamedCount>,
  pub most_common_state: Option<NamedCount>,
}

/// Oldest and youngest contestant (ages of zero or missing are ignored),
/// most appearances by name, and most common `state`. The first record
/// encountered wins every tie.
pub fn superlatives(contestants: &[Contestant]) -> Superlatives {
  let mut oldest: Option<NamedAge> = None;
  let mut youngest: Option<NamedAge> = None;
  let mut appearances: Tally<()> = Tally::new();
  let mut states: Tally<()> = Tally::new();

  for c in contestants {
    if let Some(age) = c.age.filter(|&a| a > 0) {
      if oldest.as_ref().is_none_or(|o| age > o.age) {
        oldest = Some(NamedAge { name: c.contestant_name.clone(), age });
      }
      if youngest.as_ref().is_none_or(|y| age < y.age) {
        youngest = Some(NamedAge { name: c.contestant_name.clone(), age });
      }
    }
    appearances.bump(&c.contestant_name);
    if !c.state.trim().is_empty() {
      states.bump(c.state.trim());
    }
  }

  Superlatives {
    oldest,
    youngest,
    most_appearances: appearances
      .leader()
      .map(|(name, count)| NamedCount { name, count }),
    most_common_state: states
      .leader()
      .map(|(name, count)| NamedCount { name, count }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fixtures::{cast, contestant};

  #[test]
  fn professions_are_normalized_and_capitalized() {
    let mut people = cast();
    people.push(Contestant { profession: "N/A".into(), ..Default::default() });
    people.push(Contestant { profession: "   ".into(), ..Default::default() });

    let top = top_professions(&people, 10);
    assert_eq!(top[0], ProfessionCount { profession: "Corporate trainer".into(), count: 2 });
    assert!(top.iter().any(|p| p.profession == "Retired navy seal"));
    assert!(top.iter().all(|p| p.profession != "N/a"));
    assert_eq!(top.len(), 5);
  }

  #[test]
  fn top_n_never_exceeds_n_and_breaks_ties_by_first_seen() {
    let people = cast();
    let top = top_professions(&people, 3);
    assert_eq!(top.len(), 3);
    // All remaining professions tie at one; table order decides.
    assert_eq!(top[1].profession, "River guide");
    assert_eq!(top[2].profession, "Retired navy seal");
    assert!(top_professions(&people, 0).is_empty());
  }

  #[test]
  fn winners_grouped_by_name() {
    let mut people = cast();
    people.push(contestant("Tina Wesson", "27", 1, 50));
    let top = top_winners(&people, 5);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].name, "Tina Wesson");
    assert_eq!(top[0].wins, 2);
    assert_eq!(top[0].seasons, vec!["2".to_string(), "27".to_string()]);
    assert_eq!(top[1].name, "Richard Hatch");
  }

  #[test]
  fn season_rank_counts_strictly_higher_finishes() {
    let people = cast();
    // Season 1 finishes are 1, 2, 3.
    assert_eq!(season_rank(&people[2], &people), 1);
    assert_eq!(season_rank(&people[1], &people), 2);
    assert_eq!(season_rank(&people[0], &people), 3);
    // Season 8 has only one entry.
    assert_eq!(season_rank(&people[5], &people), 1);
  }

  #[test]
  fn season_rank_ties_share_a_rank() {
    let people = vec![
      contestant("A", "5", 4, 30),
      contestant("B", "5", 4, 30),
      contestant("C", "5", 6, 30),
    ];
    assert_eq!(season_rank(&people[0], &people), 2);
    assert_eq!(season_rank(&people[1], &people), 2);
  }

  #[test]
  fn superlatives_pick_first_on_ties() {
    let mut people = cast();
    people[0].state = "Rhode Island".into();
    people[5].state = "Rhode Island".into();
    people[1].state = "California".into();

    let s = superlatives(&people);
    assert_eq!(s.oldest, Some(NamedAge { name: "Rudy Boesch".into(), age: 72 }));
    assert_eq!(s.youngest, Some(NamedAge { name: "Kelly Wiglesworth".into(), age: 22 }));
    assert_eq!(
      s.most_appearances,
      Some(NamedCount { name: "Richard Hatch".into(), count: 2 })
    );
    assert_eq!(
      s.most_common_state,
      Some(NamedCount { name: "Rhode Island".into(), count: 2 })
    );
  }

  #[test]
  fn superlatives_of_nothing() {
    assert_eq!(superlatives(&[]), Superlatives::default());
  }
}
