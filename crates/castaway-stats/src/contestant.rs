//! Per-contestant derived figures: profile stats, performance bars, and the
//! votes-against scatter.

use castaway_core::{Contestant, SeasonFilter};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::rankings::season_rank;

/// Standard season length used by the days-played estimate.
const SEASON_DAYS: f64 = 39.0;
/// Typical cast size used by the days-played estimate.
const CAST_SIZE: f64 = 18.0;

/// Estimate days survived from finish position alone:
/// `round((1 - (finish - 1) / 18) * 39)`, with the winner at the full 39.
///
/// Returns `None` when the finish position is unknown.
pub fn days_played(contestant: &Contestant) -> Option<i64> {
  let finish = contestant.finish?;
  if finish == 1 {
    return Some(SEASON_DAYS as i64);
  }
  let fraction = 1.0 - (f64::from(finish) - 1.0) / CAST_SIZE;
  Some((fraction * SEASON_DAYS).round() as i64)
}

// ─── Profile stats ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContestantStats {
  pub days_played:         Option<i64>,
  pub total_votes_against: Option<u32>,
  pub season_rank:         usize,
  /// `normalized_finish` as a percentage with one decimal, e.g. `"93.8%"`.
  pub percentile_finish:   Option<String>,
}

pub fn contestant_stats(contestant: &Contestant, all: &[Contestant]) -> ContestantStats {
  ContestantStats {
    days_played:         days_played(contestant),
    total_votes_against: contestant.votes_against,
    season_rank:         season_rank(contestant, all),
    percentile_finish:   contestant
      .normalized_finish
      .map(|f| format!("{:.1}%", f * 100.0)),
  }
}

// ─── Identity ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
  pub age:      Option<u32>,
  pub gender:   &'static str,
  pub city:     String,
  pub state:    String,
  pub badges:   Vec<&'static str>,
}

/// Whole years between `birthdate` and `on`.
pub fn age_on(birthdate: NaiveDate, on: NaiveDate) -> Option<u32> {
  let mut years = on.year() - birthdate.year();
  if (on.month(), on.day()) < (birthdate.month(), birthdate.day()) {
    years -= 1;
  }
  u32::try_from(years).ok()
}

/// Profile header: current age (from birthdate when known, else the
/// recorded age), gender label, and demographic badges. The generic "POC"
/// badge appears only when no specific ethnicity is set.
pub fn identity(contestant: &Contestant, on: NaiveDate) -> Identity {
  let c = contestant;
  let age = c.birthdate.and_then(|b| age_on(b, on)).or(c.age);

  let mut badges = Vec::new();
  if c.african_american {
    badges.push("African American");
  }
  if c.asian_american {
    badges.push("Asian American");
  }
  if c.latin_american {
    badges.push("Latin American");
  }
  if c.poc && !c.african_american && !c.asian_american && !c.latin_american {
    badges.push("POC");
  }
  if c.jewish {
    badges.push("Jewish");
  }
  if c.muslim {
    badges.push("Muslim");
  }
  if c.lgbt {
    badges.push("LGBT");
  }

  Identity {
    age,
    gender: c.gender().label(),
    city: c.city.clone(),
    state: c.homestate.clone(),
    badges,
  }
}

// ─── Performance ─────────────────────────────────────────────────────────────

/// How a contestant left the game other than by vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Exit {
  Quit,
  Evacuated,
  Ejected,
}

impl Exit {
  /// Checked in order: quit, evacuated, ejected.
  pub fn of(contestant: &Contestant) -> Option<Self> {
    if contestant.quit {
      Some(Self::Quit)
    } else if contestant.evac {
      Some(Self::Evacuated)
    } else if contestant.ejected {
      Some(Self::Ejected)
    } else {
      None
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
  pub name:  &'static str,
  pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Performance {
  /// Finish percentile, then merge / jury / FTC as 100 or 0.
  pub bars:        Vec<Bar>,
  pub exit:        Option<Exit>,
  pub is_winner:   bool,
  pub jury_votes:  Option<u32>,
  pub fire_making: bool,
}

pub fn performance(contestant: &Contestant) -> Performance {
  let milestone = |reached: bool| if reached { 100.0 } else { 0.0 };
  Performance {
    bars:        vec![
      Bar { name: "Finish", value: contestant.normalized_finish.unwrap_or(0.0) * 100.0 },
      Bar { name: "Merge", value: milestone(contestant.merge) },
      Bar { name: "Jury", value: milestone(contestant.jury) },
      Bar { name: "FTC", value: milestone(contestant.ftc) },
    ],
    exit:        Exit::of(contestant),
    is_winner:   contestant.is_winner(),
    jury_votes:  contestant.num_jury_votes.filter(|&v| v > 0),
    fire_making: contestant.fmc,
  }
}

// ─── Scatter ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
  pub contestant:        String,
  pub season:            String,
  pub votes_against:     u32,
  pub normalized_finish: Option<f64>,
}

/// Votes against versus normalised finish, ascending by votes against.
pub fn votes_vs_finish(contestants: &[Contestant], filter: &SeasonFilter) -> Vec<ScatterPoint> {
  let mut points: Vec<ScatterPoint> = contestants
    .iter()
    .filter(|c| filter.matches(&c.num_season))
    .map(|c| ScatterPoint {
      contestant:        c.contestant_name.clone(),
      season:            c.num_season.clone(),
      votes_against:     c.votes_against_or_zero(),
      normalized_finish: c.normalized_finish,
    })
    .collect();
  points.sort_by_key(|p| p.votes_against);
  points
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fixtures::{cast, contestant};

  #[test]
  fn days_played_follows_linear_estimate() {
    assert_eq!(days_played(&contestant("W", "1", 1, 30)), Some(39));
    assert_eq!(days_played(&contestant("R", "1", 2, 30)), Some(37));
    assert_eq!(days_played(&contestant("F", "1", 19, 30)), Some(0));
    assert_eq!(days_played(&Contestant::default()), None);
  }

  #[test]
  fn stats_format_percentile() {
    let mut people = cast();
    people[1].normalized_finish = Some(0.9375);
    let stats = contestant_stats(&people[1], &people);
    assert_eq!(stats.percentile_finish.as_deref(), Some("93.8%"));
    assert_eq!(stats.total_votes_against, Some(4));
    assert_eq!(stats.season_rank, 2);
    assert_eq!(stats.days_played, Some(37));
  }

  #[test]
  fn age_from_birthdate_respects_birthday() {
    let born = NaiveDate::from_ymd_opt(1961, 4, 8).unwrap();
    let before = NaiveDate::from_ymd_opt(2024, 4, 7).unwrap();
    let on = NaiveDate::from_ymd_opt(2024, 4, 8).unwrap();
    assert_eq!(age_on(born, before), Some(62));
    assert_eq!(age_on(born, on), Some(63));
    assert_eq!(age_on(on, born), None);
  }

  #[test]
  fn identity_badges() {
    let mut c = contestant("X", "1", 4, 30);
    c.poc = true;
    c.lgbt = true;
    let today = NaiveDate::from_ymd_opt(2024, 5, 8).unwrap();
    assert_eq!(identity(&c, today).badges, vec!["POC", "LGBT"]);
    assert_eq!(identity(&c, today).age, Some(30));

    c.asian_american = true;
    c.birthdate = NaiveDate::from_ymd_opt(2000, 1, 1);
    let id = identity(&c, today);
    assert_eq!(id.badges, vec!["Asian American", "LGBT"]);
    assert_eq!(id.age, Some(24));
  }

  #[test]
  fn performance_bars_and_exit() {
    let mut c = contestant("X", "1", 4, 30);
    c.normalized_finish = Some(0.5);
    c.merge = true;
    c.evac = true;
    c.ejected = true;
    let p = performance(&c);
    assert_eq!(p.bars[0].value, 50.0);
    assert_eq!(p.bars[1].value, 100.0);
    assert_eq!(p.bars[2].value, 0.0);
    assert_eq!(p.exit, Some(Exit::Evacuated));
    assert!(!p.is_winner);
  }

  #[test]
  fn scatter_sorted_by_votes() {
    let points = votes_vs_finish(&cast(), &SeasonFilter::Season("1".into()));
    let votes: Vec<_> = points.iter().map(|p| p.votes_against).collect();
    assert_eq!(votes, vec![0, 2, 4]);
    assert_eq!(votes_vs_finish(&cast(), &SeasonFilter::All).len(), 6);
  }
}
