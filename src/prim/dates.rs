// Copyright 2025 Seth Pendergrass. See LICENSE.

//! Capture-date resolution over tiered metadata fields.
//!
//! Date & time tags rank by how likely they reflect the actual moment of
//! capture versus a container or transfer timestamp. The precedence within
//! each tier is a fixed policy, not best-effort: the first field holding a
//! valid date wins. Malformed values are treated as absent and fall through
//! to the next field.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use super::Metadata;

/// The capture date resolved for one file, if any, and whether it came from
/// the medium-confidence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDate {
  pub date_time: Option<NaiveDateTime>,
  pub approx:    bool,
}

/// Resolves `metadata`'s capture date from the high-confidence tier, falling
/// back to the medium-confidence tier only when `recover_date` is set. The
/// fallback is flagged `approx` for downstream naming.
pub fn resolve(metadata: &Metadata, recover_date: bool) -> ResolvedDate {
  if let Some(date_time) = first_valid(high_confidence(metadata)) {
    return ResolvedDate {
      date_time: Some(date_time),
      approx:    false,
    };
  }

  if recover_date {
    if let Some(date_time) = first_valid(medium_confidence(metadata)) {
      return ResolvedDate {
        date_time: Some(date_time),
        approx:    true,
      };
    }
  }

  ResolvedDate {
    date_time: None,
    approx:    false,
  }
}

/// Converts a date & time string to a `NaiveDateTime`. Accepts `ExifTool`'s
/// default `YYYY:MM:DD HH:MM:SS` form as well as the `-`-separated variant,
/// with optional sub-seconds and UTC offset, both ignored. Returns `None`
/// unless the value is a real calendar date & time.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
  let re = Regex::new(
    r"^(\d{4})[:-](\d{2})[:-](\d{2})[ T](\d{2}):(\d{2}):(\d{2})(?:\.\d+)?(?:[+-]\d{2}:?\d{2}|Z)?$",
  )
  .unwrap();

  let caps = re.captures(value.trim())?;
  let field = |i: usize| caps.get(i).unwrap().as_str().parse().ok();

  NaiveDate::from_ymd_opt(
    caps.get(1).unwrap().as_str().parse().ok()?,
    field(2)?,
    field(3)?,
  )
  .and_then(|d| d.and_hms_opt(field(4)?, field(5)?, field(6)?))
}

/// Capture-time fields, in precedence order.
fn high_confidence(metadata: &Metadata) -> [Option<&str>; 6] {
  [
    metadata.sub_sec_date_time_original.as_deref(),
    metadata.date_time_original.as_deref(),
    metadata.sub_sec_create_date.as_deref(),
    metadata.create_date.as_deref(),
    metadata.date_time_created.as_deref(),
    metadata.media_create_date.as_deref(),
  ]
}

/// Container & modification-time fields, in precedence order.
fn medium_confidence(metadata: &Metadata) -> [Option<&str>; 4] {
  [
    metadata.creation_date.as_deref(),
    metadata.metadata_date.as_deref(),
    metadata.modify_date.as_deref(),
    metadata.file_modify_date.as_deref(),
  ]
}

/// First field in `fields` whose value is a valid date & time.
fn first_valid<'a>(fields: impl IntoIterator<Item = Option<&'a str>>) -> Option<NaiveDateTime> {
  fields.into_iter().flatten().find_map(parse_date_time)
}
