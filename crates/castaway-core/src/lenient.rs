//! Lenient field decoders for source tables.
//!
//! The upstream tables are hand-maintained spreadsheets: a numeric column may
//! hold `"12"`, `12`, `12.0`, an empty cell, or stray text. Every decoder here
//! accepts all of those and maps anything it cannot interpret to `None`
//! (or `false` for flags) rather than failing the whole row.

use std::fmt;

use chrono::NaiveDate;
use serde::{
  Deserializer,
  de::{self, Visitor},
};

/// Date formats seen in the `birthdate` column, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%-m/%-d/%Y"];

// ─── Scalar parsing ──────────────────────────────────────────────────────────

/// Parse a non-negative whole number from free text.
///
/// `"7"`, `" 7 "` and `"7.0"` all yield `Some(7)`; `"7.5"`, `"-1"` and `""`
/// yield `None`.
pub fn parse_count(raw: &str) -> Option<u32> {
  let s = raw.trim();
  if let Ok(n) = s.parse::<u32>() {
    return Some(n);
  }
  s.parse::<f64>().ok().and_then(whole_f64)
}

/// Parse a finite floating-point number from free text.
pub fn parse_ratio(raw: &str) -> Option<f64> {
  s_to_f64(raw.trim())
}

/// Interpret free text as a boolean flag: any non-zero number, `true`, `yes`
/// or `y` (case-insensitive) is set.
pub fn parse_flag(raw: &str) -> bool {
  let s = raw.trim();
  if let Some(n) = s_to_f64(s) {
    return n != 0.0;
  }
  matches!(s.to_ascii_lowercase().as_str(), "true" | "yes" | "y")
}

/// Parse a calendar date in any of the accepted [`DATE_FORMATS`].
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
  let s = raw.trim();
  DATE_FORMATS
    .iter()
    .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn s_to_f64(s: &str) -> Option<f64> {
  s.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn whole_f64(n: f64) -> Option<u32> {
  (n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX))
    .then_some(n as u32)
}

// ─── Serde entry points ──────────────────────────────────────────────────────

/// `deserialize_with` target for `Option<u32>` columns.
pub fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
  D: Deserializer<'de>,
{
  deserializer.deserialize_any(CountVisitor)
}

/// `deserialize_with` target for `Option<f64>` columns.
pub fn ratio<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  deserializer.deserialize_any(RatioVisitor)
}

/// `deserialize_with` target for `bool` flag columns.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
  D: Deserializer<'de>,
{
  deserializer.deserialize_any(FlagVisitor)
}

/// `deserialize_with` target for `Option<NaiveDate>` columns.
pub fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
  D: Deserializer<'de>,
{
  deserializer.deserialize_any(DateVisitor)
}

/// `deserialize_with` target for free-text columns that may arrive as
/// numbers (e.g. a season number stored as `12`).
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  deserializer.deserialize_any(TextVisitor)
}

// ─── Visitors ────────────────────────────────────────────────────────────────

struct CountVisitor;

impl<'de> Visitor<'de> for CountVisitor {
  type Value = Option<u32>;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a whole number, numeric string, or empty cell")
  }

  fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
    Ok(None)
  }

  fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
    Ok(u32::try_from(v).ok())
  }

  fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
    Ok(u32::try_from(v).ok())
  }

  fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
    Ok(u32::try_from(v).ok())
  }

  fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
    Ok(u32::try_from(v).ok())
  }

  fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
    Ok(whole_f64(v))
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
    Ok(parse_count(v))
  }

  fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> { Ok(None) }

  fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> { Ok(None) }

  fn visit_some<D: Deserializer<'de>>(
    self,
    deserializer: D,
  ) -> Result<Self::Value, D::Error> {
    deserializer.deserialize_any(self)
  }
}

struct RatioVisitor;

impl<'de> Visitor<'de> for RatioVisitor {
  type Value = Option<f64>;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a number, numeric string, or empty cell")
  }

  fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
    Ok(None)
  }

  fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
    Ok(Some(v as f64))
  }

  fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
    Ok(Some(v as f64))
  }

  fn visit_u128<E: de::Error>(self, _: u128) -> Result<Self::Value, E> {
    Ok(None)
  }

  fn visit_i128<E: de::Error>(self, _: i128) -> Result<Self::Value, E> {
    Ok(None)
  }

  fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
    Ok(Some(v).filter(|n| n.is_finite()))
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
    Ok(parse_ratio(v))
  }

  fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> { Ok(None) }

  fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> { Ok(None) }

  fn visit_some<D: Deserializer<'de>>(
    self,
    deserializer: D,
  ) -> Result<Self::Value, D::Error> {
    deserializer.deserialize_any(self)
  }
}

struct FlagVisitor;

impl<'de> Visitor<'de> for FlagVisitor {
  type Value = bool;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a 0/1 flag, boolean, or empty cell")
  }

  fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
    Ok(v)
  }

  fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
    Ok(v != 0)
  }

  fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
    Ok(v != 0)
  }

  fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
    Ok(v != 0)
  }

  fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
    Ok(v != 0)
  }

  fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
    Ok(v != 0.0 && !v.is_nan())
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
    Ok(parse_flag(v))
  }

  fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> { Ok(false) }

  fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> { Ok(false) }

  fn visit_some<D: Deserializer<'de>>(
    self,
    deserializer: D,
  ) -> Result<Self::Value, D::Error> {
    deserializer.deserialize_any(self)
  }
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
  type Value = Option<NaiveDate>;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a date string or empty cell")
  }

  fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
    Ok(None)
  }

  fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
    Ok(None)
  }

  fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
    Ok(None)
  }

  fn visit_u128<E: de::Error>(self, _: u128) -> Result<Self::Value, E> {
    Ok(None)
  }

  fn visit_i128<E: de::Error>(self, _: i128) -> Result<Self::Value, E> {
    Ok(None)
  }

  fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
    Ok(None)
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
    Ok(parse_date(v))
  }

  fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> { Ok(None) }

  fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> { Ok(None) }

  fn visit_some<D: Deserializer<'de>>(
    self,
    deserializer: D,
  ) -> Result<Self::Value, D::Error> {
    deserializer.deserialize_any(self)
  }
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
  type Value = String;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a string, number, or empty cell")
  }

  fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
    Ok(v.to_string())
  }

  fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
    Ok(v.to_string())
  }

  fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
    Ok(v.to_string())
  }

  fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
    Ok(v.to_string())
  }

  fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
    Ok(v.to_string())
  }

  fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
    // A season number read as `12.0` must still join against `"12"`.
    Ok(match whole_f64(v) {
      Some(n) => n.to_string(),
      None => v.to_string(),
    })
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
    Ok(v.trim().to_owned())
  }

  fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
    Ok(String::new())
  }

  fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
    Ok(String::new())
  }

  fn visit_some<D: Deserializer<'de>>(
    self,
    deserializer: D,
  ) -> Result<Self::Value, D::Error> {
    deserializer.deserialize_any(self)
  }
}
