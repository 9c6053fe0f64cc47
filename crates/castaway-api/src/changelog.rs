//! `GET /changelog`: release notes for the dashboard.

use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
  pub version: &'static str,
  pub date:    NaiveDate,
  pub changes: &'static [&'static str],
}

const MAY_10_2025: NaiveDate = match NaiveDate::from_ymd_opt(2025, 5, 10) {
  Some(date) => date,
  None => panic!("invalid release date"),
};

/// Newest first.
pub const RELEASES: &[Release] = &[
  Release {
    version: "v1.2",
    date:    MAY_10_2025,
    changes: &[
      "Added Supabase integration for data storage",
      "Added changelog page to track updates",
      "Implemented data caching for improved performance",
      "Optimized data loading with server components",
      "Enhanced mobile responsiveness across all pages",
    ],
  },
  Release {
    version: "v1.1",
    date:    MAY_10_2025,
    changes: &[
      "Added contestant detail pages",
      "Added season detail pages",
      "Implemented comparison tool for contestants and seasons",
      "Fixed hometown parsing for contestant data",
      "Resolved hydration errors in chart components",
      "Enhanced data visualization with interactive charts",
      "Improved filtering options for contestants and seasons",
    ],
  },
  Release {
    version: "v1.0",
    date:    MAY_10_2025,
    changes: &[
      "Initial release of Survivor Stats Dashboard",
      "Basic statistics for contestants, seasons, and tribes",
      "Demographics visualization",
      "Winners timeline",
    ],
  },
];

pub async fn handler() -> Json<&'static [Release]> { Json(RELEASES) }
