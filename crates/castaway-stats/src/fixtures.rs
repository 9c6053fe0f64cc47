//! Small hand-built datasets shared by the unit tests.

use castaway_core::{Contestant, Season, Tribe};

pub fn contestant(name: &str, season: &str, finish: u32, age: u32) -> Contestant {
  Contestant {
    contestant_name: name.into(),
    num_season: season.into(),
    finish: Some(finish),
    age: Some(age),
    ..Default::default()
  }
}

pub fn season(num: &str, name: &str, winner: &str) -> Season {
  Season {
    num_season: num.into(),
    season: name.into(),
    winner: winner.into(),
    ..Default::default()
  }
}

pub fn tribe(season: &str, name: &str, merge: bool) -> Tribe {
  Tribe {
    num_season: season.into(),
    tribe: name.into(),
    merge,
    ..Default::default()
  }
}

/// Two short seasons with one returning player.
pub fn cast() -> Vec<Contestant> {
  let mut hatch = contestant("Richard Hatch", "1", 1, 39);
  hatch.votes_against = Some(0);
  hatch.gender_code = "M".into();
  hatch.profession = "Corporate Trainer".into();
  hatch.homestate = "RI".into();
  hatch.num_jury_votes = Some(4);

  let mut kelly = contestant("Kelly Wiglesworth", "1", 2, 22);
  kelly.votes_against = Some(4);
  kelly.gender_code = "F".into();
  kelly.profession = "River Guide".into();
  kelly.homestate = "CA".into();

  let mut rudy = contestant("Rudy Boesch", "1", 3, 72);
  rudy.votes_against = Some(2);
  rudy.gender_code = "M".into();
  rudy.profession = "  retired navy seal ".into();
  rudy.homestate = "Virginia".into();

  let mut tina = contestant("Tina Wesson", "2", 1, 40);
  tina.votes_against = Some(1);
  tina.gender_code = "F".into();
  tina.profession = "Nurse".into();
  tina.homestate = "TN".into();
  tina.num_jury_votes = Some(4);

  let mut colby = contestant("Colby Donaldson", "2", 2, 26);
  colby.votes_against = Some(0);
  colby.gender_code = "M".into();
  colby.profession = "Custom Car Designer".into();
  colby.homestate = "TX".into();

  let mut hatch_again = contestant("Richard Hatch", "8", 10, 42);
  hatch_again.votes_against = Some(5);
  hatch_again.gender_code = "M".into();
  hatch_again.profession = "Corporate Trainer".into();
  hatch_again.homestate = "RI".into();

  vec![hatch, kelly, rudy, tina, colby, hatch_again]
}

pub fn seasons() -> Vec<Season> {
  let mut borneo = season("1", "Borneo", "Richard Hatch");
  borneo.num_jury = Some(7);
  borneo.num_contestants = Some(16);
  borneo.num_days = Some(39);
  let mut outback = season("2", "The Australian Outback", "Tina Wesson");
  outback.num_jury = Some(7);
  outback.num_contestants = Some(16);
  outback.num_days = Some(42);
  vec![borneo, outback]
}
