// Copyright 2025 Seth Pendergrass. See LICENSE.

//! Target path derivation and skip-vs-copy decisions.
//!
//! The on-disk layout is part of the observable contract: re-running over
//! the same inputs must reproduce identical paths, and convergence relies
//! solely on target-path existence. The planner decides; it never copies.

use std::path::{Path, PathBuf};

use super::FinalRecord;

/// Bucket directory under the library root for files with no resolvable
/// capture date.
pub const NO_DATE_DIR: &str = "no-photo-taken-date";

/// Suffix appended to names whose date came from a medium-confidence field.
const APPROX_SUFFIX: &str = "-approx";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementAction {
  Copy,
  SkipExisting,
}

/// Where one record belongs in the library, and whether a physical copy is
/// needed to put it there.
#[derive(Debug, PartialEq, Eq)]
pub struct PlacementDecision {
  pub target: PathBuf,
  pub action: PlacementAction,
}

/// Plans placement for `record` under `library`. A file already present at
/// the computed target path is skipped without reading its content;
/// existence alone is the idempotency key.
pub fn plan(record: &FinalRecord, library: &Path) -> PlacementDecision {
  let target = target_path(record, library);
  let action = if target.exists() {
    PlacementAction::SkipExisting
  } else {
    PlacementAction::Copy
  };

  PlacementDecision { target, action }
}

/// `library/YYYY/MM/DD/YYYY.MM.DD_HH.MM.SS-<hash>[-approx].<ext>` for dated
/// records; `library/no-photo-taken-date/<hash>.<ext>` otherwise. The
/// extension keeps the case it was encountered with.
fn target_path(record: &FinalRecord, library: &Path) -> PathBuf {
  let (dir, mut name) = match record.date_time {
    Some(date_time) => {
      let mut name = format!(
        "{}-{}",
        date_time.format("%Y.%m.%d_%H.%M.%S"),
        record.identity_hash
      );
      if record.approx {
        name.push_str(APPROX_SUFFIX);
      }
      (library.join(date_time.format("%Y/%m/%d").to_string()), name)
    }
    None => (library.join(NO_DATE_DIR), record.identity_hash.clone()),
  };

  if let Some(ext) = &record.extension {
    name.push('.');
    name.push_str(ext);
  }

  dir.join(name)
}
