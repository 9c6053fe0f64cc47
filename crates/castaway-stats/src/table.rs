//! Search, sort and pagination shared by the contestant, season and tribe
//! tables.

use std::cmp::Ordering;

use castaway_core::{Contestant, Error, Result, Season, Tribe};
use serde::{Deserialize, Serialize};

// ─── Cells ───────────────────────────────────────────────────────────────────

/// A sortable value pulled out of a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
  Number(f64),
  Text(&'a str),
}

impl Cell<'_> {
  fn as_number(&self) -> Option<f64> {
    match self {
      Self::Number(n) => Some(*n),
      Self::Text(t) => t.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
    }
  }

  fn as_text(&self) -> String {
    match self {
      Self::Number(n) => n.to_string(),
      Self::Text(t) => t.to_lowercase(),
    }
  }

  /// Numeric when both sides read as numbers, else case-insensitive text.
  fn compare(&self, other: &Self) -> Ordering {
    match (self.as_number(), other.as_number()) {
      (Some(a), Some(b)) => a.total_cmp(&b),
      _ => self.as_text().cmp(&other.as_text()),
    }
  }
}

fn text(s: &str) -> Option<Cell<'_>> {
  (!s.trim().is_empty()).then_some(Cell::Text(s))
}

fn number(n: Option<u32>) -> Option<Cell<'static>> { n.map(|n| Cell::Number(n.into())) }

fn flag(b: bool) -> Option<Cell<'static>> { Some(Cell::Number(if b { 1.0 } else { 0.0 })) }

/// A record that can be shown in a paged table.
pub trait Row {
  /// Rows per page.
  const PAGE_SIZE: usize;
  /// Every key [`Row::cell`] answers for.
  const SORT_KEYS: &'static [&'static str];

  /// The value under `key`; `None` when the row has no value there.
  fn cell(&self, key: &str) -> Option<Cell<'_>>;

  /// Fields the free-text search looks in.
  fn search_fields(&self) -> Vec<&str>;
}

impl Row for Contestant {
  const PAGE_SIZE: usize = 20;
  const SORT_KEYS: &'static [&'static str] = &[
    "contestant_name",
    "num_season",
    "age",
    "finish",
    "votes_against",
    "normalized_finish",
    "city",
    "homestate",
    "profession",
    "gender",
  ];

  fn cell(&self, key: &str) -> Option<Cell<'_>> {
    match key {
      "contestant_name" => text(&self.contestant_name),
      "num_season" => text(&self.num_season),
      "age" => number(self.age),
      "finish" => number(self.finish),
      "votes_against" => number(self.votes_against),
      "normalized_finish" => self.normalized_finish.map(Cell::Number),
      "city" => text(&self.city),
      "homestate" => text(&self.homestate),
      "profession" => text(&self.profession),
      "gender" => text(&self.gender_code),
      _ => None,
    }
  }

  fn search_fields(&self) -> Vec<&str> {
    vec![
      self.contestant_name.as_str(),
      self.city.as_str(),
      self.homestate.as_str(),
      self.profession.as_str(),
    ]
  }
}

impl Row for Season {
  const PAGE_SIZE: usize = 10;
  const SORT_KEYS: &'static [&'static str] = &[
    "num_season",
    "season",
    "winner",
    "num_contestants",
    "num_days",
    "merged_tribe",
    "poc",
  ];

  fn cell(&self, key: &str) -> Option<Cell<'_>> {
    match key {
      "num_season" => text(&self.num_season),
      "season" => text(&self.season),
      "winner" => text(&self.winner),
      "num_contestants" => number(self.num_contestants),
      "num_days" => number(self.num_days),
      "merged_tribe" => text(&self.merged_tribe),
      "poc" => number(self.poc),
      _ => None,
    }
  }

  fn search_fields(&self) -> Vec<&str> {
    vec![self.season.as_str(), self.winner.as_str(), self.merged_tribe.as_str()]
  }
}

impl Row for Tribe {
  const PAGE_SIZE: usize = 20;
  const SORT_KEYS: &'static [&'static str] = &[
    "tribe",
    "num_season",
    "color",
    "num_contestants",
    "male",
    "female",
    "poc",
    "merge",
  ];

  fn cell(&self, key: &str) -> Option<Cell<'_>> {
    match key {
      "tribe" => text(&self.tribe),
      "num_season" => text(&self.num_season),
      "color" => text(&self.color),
      "num_contestants" => number(self.num_contestants),
      "male" => number(self.male),
      "female" => number(self.female),
      "poc" => number(self.poc),
      "merge" => flag(self.merge),
      _ => None,
    }
  }

  fn search_fields(&self) -> Vec<&str> { vec![self.tribe.as_str(), self.color.as_str()] }
}

// ─── Query ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Asc,
  Desc,
}

/// Default ordering when no sort key is given: latest season first.
const DEFAULT_SORT: &str = "num_season";

/// Table state as carried in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableQuery {
  pub search:    Option<String>,
  pub sort:      Option<String>,
  /// Defaults to descending for the default sort key, ascending otherwise.
  pub direction: Option<Direction>,
  /// 1-based; out-of-range values are clamped.
  pub page:      Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
  pub items:       Vec<T>,
  pub page:        usize,
  pub total_pages: usize,
  pub total_items: usize,
}

/// Filter by search text, sort, then cut out the requested page.
///
/// Rows missing the sort value go last in either direction. The sort is
/// stable, so ties keep table order.
pub fn apply<T: Row + Clone>(rows: &[T], query: &TableQuery) -> Result<Page<T>> {
  let (key, direction) = match &query.sort {
    Some(key) => (key.as_str(), query.direction.unwrap_or(Direction::Asc)),
    None => (DEFAULT_SORT, query.direction.unwrap_or(Direction::Desc)),
  };
  if !T::SORT_KEYS.contains(&key) {
    return Err(Error::UnknownSortKey(key.to_owned()));
  }

  let needle = query
    .search
    .as_deref()
    .map(|s| s.trim().to_lowercase())
    .filter(|s| !s.is_empty());

  let mut matched: Vec<&T> = rows
    .iter()
    .filter(|row| match &needle {
      Some(needle) => row
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle.as_str())),
      None => true,
    })
    .collect();

  matched.sort_by(|a, b| match (a.cell(key), b.cell(key)) {
    (Some(x), Some(y)) => match direction {
      Direction::Asc => x.compare(&y),
      Direction::Desc => y.compare(&x),
    },
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  });

  let total_items = matched.len();
  let total_pages = total_items.div_ceil(T::PAGE_SIZE).max(1);
  let page = query.page.unwrap_or(1).clamp(1, total_pages);
  let items = matched
    .into_iter()
    .skip((page - 1) * T::PAGE_SIZE)
    .take(T::PAGE_SIZE)
    .cloned()
    .collect();

  Ok(Page { items, page, total_pages, total_items })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fixtures::{cast, contestant, season, seasons, tribe};

  fn names(page: &Page<Contestant>) -> Vec<&str> {
    page.items.iter().map(|c| c.contestant_name.as_str()).collect()
  }

  #[test]
  fn default_sort_is_latest_season_first() {
    let page = apply(&cast(), &TableQuery::default()).unwrap();
    assert_eq!(page.items[0].num_season, "8");
    assert_eq!(page.items[1].num_season, "2");
    assert_eq!(page.total_items, 6);
    assert_eq!(page.total_pages, 1);
  }

  #[test]
  fn numeric_text_sorts_numerically() {
    let rows = vec![season("10", "Palau", ""), season("9", "Vanuatu", ""), season("2", "Outback", "")];
    let query = TableQuery {
      sort: Some("num_season".into()),
      ..Default::default()
    };
    let page = apply(&rows, &query).unwrap();
    let order: Vec<_> = page.items.iter().map(|s| s.num_season.as_str()).collect();
    assert_eq!(order, vec!["2", "9", "10"]);
  }

  #[test]
  fn text_sort_ignores_case_and_missing_goes_last() {
    let mut people = cast();
    people[1].contestant_name = "kelly Wiglesworth".into();
    people.push(contestant("", "3", 5, 30));
    for direction in [Direction::Asc, Direction::Desc] {
      let query = TableQuery {
        sort: Some("contestant_name".into()),
        direction: Some(direction),
        ..Default::default()
      };
      let page = apply(&people, &query).unwrap();
      assert_eq!(*names(&page).last().unwrap(), "");
    }
    let query = TableQuery { sort: Some("contestant_name".into()), ..Default::default() };
    let page = apply(&people, &query).unwrap();
    assert_eq!(&names(&page)[..3], &["Colby Donaldson", "kelly Wiglesworth", "Richard Hatch"]);
  }

  #[test]
  fn search_looks_in_listed_fields() {
    let query = TableQuery { search: Some("  TRAINER ".into()), ..Default::default() };
    let page = apply(&cast(), &query).unwrap();
    assert_eq!(page.total_items, 2);
    assert!(names(&page).iter().all(|n| *n == "Richard Hatch"));

    let query = TableQuery { search: Some("outback".into()), ..Default::default() };
    assert_eq!(apply(&seasons(), &query).unwrap().total_items, 1);

    let query = TableQuery { search: Some("pag".into()), ..Default::default() };
    let tribes = vec![tribe("1", "Pagong", false), tribe("1", "Tagi", false)];
    assert_eq!(apply(&tribes, &query).unwrap().items[0].tribe, "Pagong");
  }

  #[test]
  fn pages_clamp_into_range() {
    let rows: Vec<Season> = (1..=25).map(|n| season(&n.to_string(), "S", "")).collect();
    let page = |n| apply(&rows, &TableQuery { page: Some(n), ..Default::default() }).unwrap();

    assert_eq!(page(1).total_pages, 3);
    assert_eq!(page(1).items.len(), 10);
    assert_eq!(page(3).items.len(), 5);
    assert_eq!(page(3).items[0].num_season, "5");
    assert_eq!(page(99).page, 3);
    assert_eq!(page(0).page, 1);

    let empty = apply::<Season>(&[], &TableQuery::default()).unwrap();
    assert_eq!(empty.page, 1);
    assert_eq!(empty.total_pages, 1);
    assert!(empty.items.is_empty());
  }

  #[test]
  fn unknown_sort_key_is_an_error() {
    let query = TableQuery { sort: Some("shoe_size".into()), ..Default::default() };
    assert!(matches!(
      apply(&cast(), &query),
      Err(Error::UnknownSortKey(key)) if key == "shoe_size"
    ));
  }
}
