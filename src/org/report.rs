// Copyright 2025 Seth Pendergrass. See LICENSE.

//! Accumulates files that ended up without a resolvable capture date.

use std::{
  fs,
  path::{Path, PathBuf},
};

/// Name of the report file written under the library root.
pub const NO_DATE_REPORT: &str = "no-date-files.txt";

/// Sources with no resolvable date, in input order. A path cannot repeat
/// within one batch, so no deduplication is needed.
#[derive(Default)]
pub struct NoDateReport {
  sources: Vec<PathBuf>,
}

impl NoDateReport {
  pub fn record(&mut self, source: impl Into<PathBuf>) {
    self.sources.push(source.into());
  }

  pub fn sources(&self) -> &[PathBuf] {
    &self.sources
  }

  /// Writes one source path per line, newline-terminated. Nothing is written
  /// when every file resolved a date.
  pub fn write(&self, file: impl AsRef<Path>) -> Result<(), String> {
    if self.sources.is_empty() {
      return Ok(());
    }

    let file = file.as_ref();

    let mut contents = String::new();
    for source in &self.sources {
      contents.push_str(&source.to_string_lossy());
      contents.push('\n');
    }

    fs::write(file, contents)
      .map_err(|e| format!("{}: Failed to write no-date report ({e}).", file.display()))
  }
}
