//! Headline numbers for the dashboard cards.

use std::collections::HashSet;

use castaway_core::{Contestant, Season, Tribe};
use serde::Serialize;

use crate::ages::rounded_average_age;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
  /// Distinct contestant names; returning players count once.
  pub total_contestants: usize,
  pub total_seasons:     usize,
  /// Distinct tribe names; a name reused across seasons counts once.
  pub total_tribes:      usize,
  pub average_age:       Option<u32>,
}

pub fn dashboard_stats(
  contestants: &[Contestant],
  seasons: &[Season],
  tribes: &[Tribe],
) -> DashboardStats {
  let names: HashSet<&str> = contestants.iter().map(|c| c.contestant_name.as_str()).collect();
  let tribe_names: HashSet<&str> = tribes.iter().map(|t| t.tribe.as_str()).collect();
  DashboardStats {
    total_contestants: names.len(),
    total_seasons:     seasons.len(),
    total_tribes:      tribe_names.len(),
    average_age:       rounded_average_age(contestants),
  }
}
