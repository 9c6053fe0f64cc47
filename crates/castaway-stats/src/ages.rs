//! Age statistics: mean, histogram, and box-plot quartiles.

use castaway_core::Contestant;
use serde::{Deserialize, Serialize};

// ─── Mean ────────────────────────────────────────────────────────────────────

/// Arithmetic mean of contestant ages, counting unparsable ages as zero.
///
/// Returns `None` for an empty list.
pub fn average_age(contestants: &[Contestant]) -> Option<f64> {
  if contestants.is_empty() {
    return None;
  }
  let total: u64 = contestants.iter().map(|c| u64::from(c.age_or_zero())).sum();
  Some(total as f64 / contestants.len() as f64)
}

/// [`average_age`] rounded to the nearest whole year.
pub fn rounded_average_age(contestants: &[Contestant]) -> Option<u32> {
  average_age(contestants).map(|avg| avg.round() as u32)
}

// ─── Histogram ───────────────────────────────────────────────────────────────

/// How ages are bucketed in [`age_histogram`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGrouping {
  /// Fixed five-year ranges (the first is 18-20, the last is open-ended).
  #[default]
  Range,
  /// One bar per distinct age.
  Individual,
}

/// Bar ordering in [`age_histogram`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeOrder {
  #[default]
  Age,
  Count,
}

/// Inclusive upper bounds of the fixed ranges, paired with their labels.
const AGE_RANGES: &[(u32, &str)] = &[
  (20, "18-20"),
  (25, "21-25"),
  (30, "26-30"),
  (35, "31-35"),
  (40, "36-40"),
  (45, "41-45"),
  (50, "46-50"),
  (55, "51-55"),
  (60, "56-60"),
  (u32::MAX, "61+"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBucket {
  pub name:  String,
  pub count: usize,
}

/// Count contestants per age bucket. Ages that are missing or zero are
/// ignored.
///
/// With [`AgeGrouping::Range`] every range is present, even when empty.
pub fn age_histogram(
  contestants: &[Contestant],
  grouping: AgeGrouping,
  order: AgeOrder,
) -> Vec<AgeBucket> {
  let ages = contestants.iter().filter_map(|c| c.age).filter(|&a| a > 0);

  let mut buckets: Vec<(u32, AgeBucket)> = match grouping {
    AgeGrouping::Range => {
      let mut counts = vec![0usize; AGE_RANGES.len()];
      for age in ages {
        let idx = AGE_RANGES
          .iter()
          .position(|(upper, _)| age <= *upper)
          .unwrap_or(AGE_RANGES.len() - 1);
        counts[idx] += 1;
      }
      AGE_RANGES
        .iter()
        .zip(counts)
        .map(|((upper, label), count)| {
          (*upper, AgeBucket { name: (*label).to_owned(), count })
        })
        .collect()
    }
    AgeGrouping::Individual => {
      let mut counts: Vec<(u32, usize)> = Vec::new();
      for age in ages {
        match counts.iter_mut().find(|(a, _)| *a == age) {
          Some((_, n)) => *n += 1,
          None => counts.push((age, 1)),
        }
      }
      // Count ties stay in ascending age order.
      counts.sort_by_key(|(age, _)| *age);
      counts
        .into_iter()
        .map(|(age, count)| (age, AgeBucket { name: age.to_string(), count }))
        .collect()
    }
  };

  match order {
    AgeOrder::Age => buckets.sort_by_key(|(key, _)| *key),
    AgeOrder::Count => buckets.sort_by(|a, b| b.1.count.cmp(&a.1.count)),
  }
  buckets.into_iter().map(|(_, bucket)| bucket).collect()
}

// ─── Box plot ────────────────────────────────────────────────────────────────

/// Five-number summary with Tukey fences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlot {
  pub min:         f64,
  pub q1:          f64,
  pub median:      f64,
  pub q3:          f64,
  pub max:         f64,
  pub iqr:         f64,
  pub lower_fence: f64,
  pub upper_fence: f64,
  /// Values strictly outside the fences, ascending.
  pub outliers:    Vec<f64>,
}

impl BoxPlot {
  /// Compute the summary for `values`. Non-finite values are dropped;
  /// returns `None` when nothing is left.
  ///
  /// Quartiles are the medians of the lower half `[0, n/2)` and the upper
  /// half `[ceil(n/2), n)`, so the middle element of an odd-length list
  /// belongs to neither half.
  pub fn from_values(values: &[f64]) -> Option<Self> {
    let mut sorted: Vec<f64> =
      values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let median = median_of(&sorted)?;
    let q1 = median_of(&sorted[..n / 2]).unwrap_or(median);
    let q3 = median_of(&sorted[n.div_ceil(2)..]).unwrap_or(median);

    let iqr = q3 - q1;
    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;
    let outliers = sorted
      .iter()
      .copied()
      .filter(|v| *v < lower_fence || *v > upper_fence)
      .collect();

    Some(Self {
      min: sorted[0],
      q1,
      median,
      q3,
      max: sorted[n - 1],
      iqr,
      lower_fence,
      upper_fence,
      outliers,
    })
  }
}

/// Median of an already-sorted slice.
fn median_of(sorted: &[f64]) -> Option<f64> {
  let n = sorted.len();
  if n == 0 {
    return None;
  }
  let mid = n / 2;
  Some(if n % 2 == 1 {
    sorted[mid]
  } else {
    (sorted[mid - 1] + sorted[mid]) / 2.0
  })
}

/// Box plot over the ages of every winner with a known age.
pub fn winner_age_box_plot(contestants: &[Contestant]) -> Option<BoxPlot> {
  let ages: Vec<f64> = contestants
    .iter()
    .filter(|c| c.is_winner())
    .filter_map(|c| c.age)
    .map(f64::from)
    .collect();
  BoxPlot::from_values(&ages)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fixtures::{cast, contestant};

  #[test]
  fn average_counts_unparsable_ages_as_zero() {
    let mut people = vec![contestant("A", "1", 1, 30), contestant("B", "1", 2, 40)];
    people.push(Contestant { age: None, ..Default::default() });
    let avg = average_age(&people).unwrap();
    assert!((avg - 70.0 / 3.0).abs() < 1e-9);
  }

  #[test]
  fn average_of_nothing_is_none() {
    assert_eq!(average_age(&[]), None);
    assert_eq!(rounded_average_age(&[]), None);
  }

  #[test]
  fn range_histogram_keeps_every_bucket() {
    let buckets = age_histogram(&cast(), AgeGrouping::Range, AgeOrder::Age);
    assert_eq!(buckets.len(), AGE_RANGES.len());
    assert_eq!(buckets[0].name, "18-20");
    let by_name = |n: &str| buckets.iter().find(|b| b.name == n).unwrap().count;
    assert_eq!(by_name("21-25"), 1);
    assert_eq!(by_name("26-30"), 1);
    assert_eq!(by_name("36-40"), 2);
    assert_eq!(by_name("41-45"), 1);
    assert_eq!(by_name("61+"), 1);
    assert_eq!(by_name("46-50"), 0);
  }

  #[test]
  fn individual_histogram_sorted_by_count_is_stable() {
    let people = vec![
      contestant("A", "1", 1, 30),
      contestant("B", "1", 2, 25),
      contestant("C", "1", 3, 25),
      contestant("D", "1", 4, 40),
      Contestant { age: Some(0), ..Default::default() },
    ];
    let buckets = age_histogram(&people, AgeGrouping::Individual, AgeOrder::Count);
    let names: Vec<_> = buckets.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["25", "30", "40"]);

    let buckets = age_histogram(&people, AgeGrouping::Individual, AgeOrder::Age);
    let names: Vec<_> = buckets.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["25", "30", "40"]);
    assert_eq!(buckets[0].count, 2);
  }

  #[test]
  fn individual_count_ties_fall_back_to_age() {
    let people = vec![
      contestant("A", "1", 1, 44),
      contestant("B", "1", 2, 31),
      contestant("C", "1", 3, 27),
      contestant("D", "1", 4, 31),
    ];
    let buckets = age_histogram(&people, AgeGrouping::Individual, AgeOrder::Count);
    let names: Vec<_> = buckets.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["31", "27", "44"]);
  }

  #[test]
  fn box_plot_matches_known_winner_ages() {
    let ages = [
      39., 39., 27., 36., 34., 21., 29., 25., 33., 41., 30., 24., 31., 35., 22.,
      25., 57., 24., 26., 35., 21., 34., 22., 29., 41., 25., 34., 39., 28., 38.,
      37., 24., 25., 32., 34., 33., 27., 25., 26., 45., 32., 24., 52.,
    ];
    let plot = BoxPlot::from_values(&ages).unwrap();
    assert_eq!(plot.min, 21.0);
    assert_eq!(plot.max, 57.0);
    assert_eq!(plot.median, 31.0);
    assert_eq!(plot.q1, 25.0);
    assert_eq!(plot.q3, 36.0);
    assert_eq!(plot.outliers, vec![57.0]);
  }

  #[test]
  fn box_plot_ordering_holds_for_small_lists() {
    for values in [
      vec![5.0],
      vec![3.0, 1.0],
      vec![2.0, 9.0, 4.0],
      vec![1.0, 1.0, 1.0, 100.0],
      vec![-3.0, 0.0, 7.5, 2.5, 2.5],
    ] {
      let p = BoxPlot::from_values(&values).unwrap();
      assert!(p.min <= p.q1, "{values:?}: {p:?}");
      assert!(p.q1 <= p.median, "{values:?}: {p:?}");
      assert!(p.median <= p.q3, "{values:?}: {p:?}");
      assert!(p.q3 <= p.max, "{values:?}: {p:?}");
    }
  }

  #[test]
  fn box_plot_of_nothing_is_none() {
    assert!(BoxPlot::from_values(&[]).is_none());
    assert!(BoxPlot::from_values(&[f64::NAN]).is_none());
  }

  #[test]
  fn winner_box_plot_uses_winners_only() {
    let plot = winner_age_box_plot(&cast()).unwrap();
    assert_eq!(plot.min, 39.0);
    assert_eq!(plot.max, 40.0);
  }
}
