// Copyright 2025 Seth Pendergrass. See LICENSE.

//! Test-only utilities.

mod asserts;
mod test_dir;

use chrono::{NaiveDate, NaiveDateTime};
pub use test_dir::*;

pub use crate::{assert_err, metadata, test_dir, test_path};
pub use crate::{
  hash::hash_bytes,
  prim::{Metadata, ResolvedDate},
};

pub fn make_date_naive(
  year: i32,
  month: u32,
  day: u32,
  hour: u32,
  min: u32,
  sec: u32,
) -> NaiveDateTime {
  NaiveDate::from_ymd_opt(year, month, day)
    .and_then(|d| d.and_hms_opt(hour, min, sec))
    .unwrap_or_else(|| panic!("Invalid date & time: {year}-{month}-{day}T{hour}:{min}:{sec}"))
}

/// Builds one engine input record with an already-resolved date.
pub fn record(
  metadata: Metadata,
  date_time: Option<NaiveDateTime>,
  approx: bool,
) -> (Metadata, ResolvedDate) {
  (metadata, ResolvedDate { date_time, approx })
}

pub fn type_of<T>(_: T) -> &'static str {
  std::any::type_name::<T>()
}

#[macro_export]
macro_rules! metadata {
  ($($key:literal: $value:expr),* $(,)?) => {
    serde_json::from_value::<$crate::prim::Metadata>(
      serde_json::json!({
        "SourceFile": "-",
        $(
          $key: $value,
        )*
      })
    ).unwrap()
  }
}
