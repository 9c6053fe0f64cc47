//! Season-level views: per-season stats, winners, the cast list, and the
//! season comparison chart.

use std::{cmp::Ordering, str::FromStr};

use castaway_core::{Contestant, Error, Season};
use serde::Serialize;

use crate::{Slice, ages::rounded_average_age};

/// Seasons in ascending numeric order; unnumbered seasons keep table order
/// at the end.
fn by_number(seasons: &[Season]) -> Vec<&Season> {
  let mut sorted: Vec<&Season> = seasons.iter().collect();
  sorted.sort_by(|a, b| match (a.number(), b.number()) {
    (Some(x), Some(y)) => x.cmp(&y),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  });
  sorted
}

/// The row with `finish == 1` for the season, if the table has one.
fn winner_of<'a>(season: &Season, contestants: &'a [Contestant]) -> Option<&'a Contestant> {
  contestants
    .iter()
    .find(|c| c.num_season == season.num_season && c.is_winner())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeasonStats {
  pub average_age:      Option<u32>,
  pub total_votes:      u32,
  pub max_votes:        u32,
  /// First contestant to strictly exceed every earlier vote count.
  pub max_votes_player: Option<String>,
}

pub fn season_stats(season: &Season, contestants: &[Contestant]) -> SeasonStats {
  let cast: Vec<Contestant> = contestants
    .iter()
    .filter(|c| c.num_season == season.num_season)
    .cloned()
    .collect();

  let mut stats = SeasonStats {
    average_age: rounded_average_age(&cast),
    ..Default::default()
  };
  for c in &cast {
    let votes = c.votes_against_or_zero();
    stats.total_votes += votes;
    if votes > stats.max_votes {
      stats.max_votes = votes;
      stats.max_votes_player = Some(c.contestant_name.clone());
    }
  }
  stats
}

// ─── Winners ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonWinner {
  pub season: String,
  pub winner: String,
}

/// Season name and winner as recorded in the season table.
pub fn season_winners(seasons: &[Season]) -> Vec<SeasonWinner> {
  seasons
    .iter()
    .map(|s| SeasonWinner { season: s.season.clone(), winner: s.winner.clone() })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
  /// Chart label, `S<number>`.
  pub season:        String,
  pub season_name:   String,
  pub winner:        String,
  pub age:           u32,
  pub gender:        &'static str,
  pub votes_against: u32,
  pub jury_votes:    u32,
}

fn timeline_entry(season: &Season, winner: Option<&Contestant>) -> TimelineEntry {
  TimelineEntry {
    season:        format!("S{}", season.num_season),
    season_name:   season.season.clone(),
    winner:        season.winner.clone(),
    age:           winner.map_or(0, Contestant::age_or_zero),
    gender:        winner.map_or("Unknown", |w| w.gender().label()),
    votes_against: winner.map_or(0, Contestant::votes_against_or_zero),
    jury_votes:    winner.and_then(|w| w.num_jury_votes).unwrap_or(0),
  }
}

/// One entry per season in ascending season order. Seasons whose winner row
/// is missing report zeros and an `Unknown` gender.
pub fn winners_timeline(contestants: &[Contestant], seasons: &[Season]) -> Vec<TimelineEntry> {
  by_number(seasons)
    .into_iter()
    .map(|s| timeline_entry(s, winner_of(s, contestants)))
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinnerRow {
  #[serde(flatten)]
  pub entry:        TimelineEntry,
  pub appearance:   u32,
  pub jury_size:    u32,
  pub finalists:    u32,
  /// Won with a recorded zero votes against; a blank cell does not count.
  pub no_votes:     bool,
  /// Every juror voted for the winner.
  pub unanimous:    bool,
}

pub fn winners_table(contestants: &[Contestant], seasons: &[Season]) -> Vec<WinnerRow> {
  by_number(seasons)
    .into_iter()
    .map(|s| {
      let winner = winner_of(s, contestants);
      let entry = timeline_entry(s, winner);
      let jury_size = s.num_jury.unwrap_or(0);
      WinnerRow {
        appearance: winner.and_then(|w| w.num_appearance).unwrap_or(1),
        jury_size,
        finalists: s.num_ftc.unwrap_or(0),
        no_votes: winner.and_then(|w| w.votes_against) == Some(0),
        unanimous: jury_size > 0 && entry.jury_votes == jury_size,
        entry,
      }
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerfectGame {
  pub name:          String,
  pub season:        String,
  pub season_number: String,
  pub jury_votes:    u32,
  pub total_jury:    u32,
}

/// Winners with zero votes against, in a season present in the season
/// table, latest season first.
pub fn perfect_games(contestants: &[Contestant], seasons: &[Season]) -> Vec<PerfectGame> {
  let mut games: Vec<(Option<u32>, PerfectGame)> = contestants
    .iter()
    .filter(|c| c.is_winner() && c.votes_against == Some(0))
    .filter_map(|c| {
      let season = seasons.iter().find(|s| s.num_season == c.num_season)?;
      Some((season.number(), PerfectGame {
        name:          c.contestant_name.clone(),
        season:        season.season.clone(),
        season_number: c.num_season.clone(),
        jury_votes:    c.num_jury_votes.unwrap_or(0),
        total_jury:    season.num_jury.unwrap_or(0),
      }))
    })
    .collect();
  games.sort_by(|a, b| b.0.cmp(&a.0));
  games.into_iter().map(|(_, game)| game).collect()
}

// ─── Cast ────────────────────────────────────────────────────────────────────

/// How far a contestant got, for the season cast list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CastStatus {
  Quit,
  Evacuated,
  Ejected,
  Jury,
  #[serde(rename = "Made Merge")]
  MadeMerge,
  #[serde(rename = "Pre-Merge")]
  PreMerge,
}

impl CastStatus {
  pub fn of(c: &Contestant) -> Self {
    if c.quit {
      Self::Quit
    } else if c.evac {
      Self::Evacuated
    } else if c.ejected {
      Self::Ejected
    } else if c.jury {
      Self::Jury
    } else if c.merge {
      Self::MadeMerge
    } else {
      Self::PreMerge
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastMember {
  pub name:           String,
  pub finish:         Option<u32>,
  pub age:            Option<u32>,
  pub city:           String,
  pub homestate:      String,
  /// `tribe1`; empty when unknown.
  pub starting_tribe: String,
  pub votes_against:  Option<u32>,
  pub is_winner:      bool,
  pub status:         CastStatus,
}

/// Contestants ordered by finish, winner first. Rows without a finish go
/// last.
pub fn cast_by_finish(contestants: &[Contestant]) -> Vec<CastMember> {
  let mut sorted: Vec<&Contestant> = contestants.iter().collect();
  sorted.sort_by_key(|c| c.finish.unwrap_or(u32::MAX));
  sorted
    .into_iter()
    .map(|c| CastMember {
      name:           c.contestant_name.clone(),
      finish:         c.finish,
      age:            c.age,
      city:           c.city.clone(),
      homestate:      c.homestate.clone(),
      starting_tribe: c.tribe1.clone(),
      votes_against:  c.votes_against,
      is_winner:      c.is_winner(),
      status:         CastStatus::of(c),
    })
    .collect()
}

// ─── Comparison chart ────────────────────────────────────────────────────────

/// Which bars the season comparison chart shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeasonMetricGroup {
  #[default]
  Demographics,
  Structure,
  Twists,
}

impl FromStr for SeasonMetricGroup {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "demographics" => Ok(Self::Demographics),
      "structure" => Ok(Self::Structure),
      "twists" => Ok(Self::Twists),
      other => Err(Error::UnknownMetric(other.to_owned())),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonBars {
  /// Chart label, `S<number>`.
  pub season:      String,
  pub season_name: String,
  pub bars:        Vec<Slice>,
}

pub fn season_comparison(seasons: &[Season], group: SeasonMetricGroup) -> Vec<SeasonBars> {
  let n = |v: Option<u32>| v.unwrap_or(0) as usize;
  by_number(seasons)
    .into_iter()
    .map(|s| {
      let bars = match group {
        SeasonMetricGroup::Demographics => vec![
          Slice::new("AA", n(s.african_american)),
          Slice::new("Asian", n(s.asian_american)),
          Slice::new("Latin", n(s.latin_american)),
          Slice::new("Total POC", n(s.poc)),
          Slice::new("LGBT", n(s.lgbt)),
        ],
        SeasonMetricGroup::Structure => vec![
          Slice::new("Contestants", n(s.num_contestants)),
          Slice::new("Merge", n(s.num_merge)),
          Slice::new("Jury", n(s.num_jury)),
          Slice::new("FTC", n(s.num_ftc)),
          Slice::new("Days", n(s.num_days)),
        ],
        SeasonMetricGroup::Twists => vec![
          Slice::new("Quits", n(s.num_quits)),
          Slice::new("Evacuations", n(s.num_evacs)),
          Slice::new("Swaps", n(s.num_swaps)),
          Slice::new("Redemption Island", usize::from(s.redemption_island)),
          Slice::new("Edge of Extinction", usize::from(s.edge_of_extinction)),
        ],
      };
      SeasonBars {
        season: format!("S{}", s.num_season),
        season_name: s.season.clone(),
        bars,
      }
    })
    .collect()
}

fn plural(count: u32, singular: &str, plural: &str) -> String {
  if count == 1 {
    format!("1 {singular}")
  } else {
    format!("{count} {plural}")
  }
}

/// Notable format twists of a season, for the profile header.
pub fn twists(season: &Season) -> Vec<String> {
  let mut out = Vec::new();
  if season.redemption_island {
    out.push("Redemption Island".to_owned());
  }
  if season.edge_of_extinction {
    out.push("Edge of Extinction".to_owned());
  }
  if let Some(n) = season.num_swaps.filter(|&n| n > 0) {
    out.push(plural(n, "tribe swap", "tribe swaps"));
  }
  if let Some(n) = season.num_quits.filter(|&n| n > 0) {
    out.push(plural(n, "quit", "quits"));
  }
  if let Some(n) = season.num_evacs.filter(|&n| n > 0) {
    out.push(plural(n, "evacuation", "evacuations"));
  }
  out
}
