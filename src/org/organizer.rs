// Copyright 2025 Seth Pendergrass. See LICENSE.

//! Full organization pass over one import batch.

use std::path::Path;

use super::{
  NO_DATE_REPORT, NoDateReport, PairIndex, PlacementAction, identity, placement,
};
use crate::{io, prim};

/// Sorts every file under `import` into `library`.
///
/// Identity resolution needs full visibility across all records sharing an
/// identity, so the pair index is built over the entire batch before any
/// record is finalized. Placement is recomputed from scratch each run;
/// convergence relies solely on target-path existence, so re-running over
/// the same inputs is a no-op.
pub fn organize(import: &Path, library: &Path, recover_date: bool) -> Result<(), String> {
  log::info!(
    "Organizing {} into {}.",
    import.display(),
    library.display()
  );

  let files = io::collect_files(import)?;
  if files.is_empty() {
    log::info!("No files found.");
    return Ok(());
  }

  log::info!("Reading metadata for {} files.", files.len());
  let metadata = io::read_metadata_batch(&files)?;

  let records = metadata
    .into_iter()
    .map(|m| {
      let resolved = prim::resolve(&m, recover_date);
      (m, resolved)
    })
    .collect::<Vec<_>>();

  place_records(&records, library)
}

/// Finalizes and places `records`, in input order. The index must already
/// cover the full batch.
fn place_records(
  records: &[(prim::Metadata, prim::ResolvedDate)],
  library: &Path,
) -> Result<(), String> {
  let index = PairIndex::build(records);

  let mut report = NoDateReport::default();
  let mut copied = 0usize;
  let mut skipped = 0usize;

  for (metadata, resolved) in records {
    let record = identity::finalize(metadata, *resolved, &index)?;

    if record.date_time.is_none() {
      log::warn!("{}: No capture date found.", record.source.display());
      report.record(&record.source);
    }

    let decision = placement::plan(&record, library);
    match decision.action {
      PlacementAction::SkipExisting => {
        log::debug!(
          "{}: Already in library at {}.",
          record.source.display(),
          decision.target.display()
        );
        skipped += 1;
      }
      PlacementAction::Copy => {
        log::debug!(
          "{}: Copying to {}.",
          record.source.display(),
          decision.target.display()
        );
        io::copy_file(&record.source, &decision.target)?;
        copied += 1;
      }
    }
  }

  report.write(library.join(NO_DATE_REPORT))?;

  log::info!(
    "Copied {copied} files, skipped {skipped} already present, {} without a capture date.",
    report.sources().len()
  );

  Ok(())
}

#[cfg(test)]
mod test_place_records {
  use std::fs;

  use super::*;
  use crate::testing::*;

  #[test]
  fn converges_under_repeated_runs() {
    let d = test_dir!(
      "import/a.jpg": "image a",
    );
    let library = d.get_path("library");
    fs::create_dir(&library).unwrap();
    let records = vec![record(
      metadata!(
        "SourceFile": d.get_path("import/a.jpg").to_str().unwrap(),
      ),
      Some(make_date_naive(2024, 1, 2, 3, 4, 5)),
      false,
    )];

    place_records(&records, &library).unwrap();
    let first = d.files();
    place_records(&records, &library).unwrap();

    assert_eq!(first, d.files());
  }

  #[test]
  fn copies_live_photo_pair_under_one_identity() {
    let d = test_dir!(
      "import/photo.heic": "image bytes",
      "import/photo.mov": "video bytes",
    );
    let library = d.get_path("library");
    fs::create_dir(&library).unwrap();
    let records = vec![
      record(
        metadata!("SourceFile": d.get_path("import/photo.heic").to_str().unwrap()),
        Some(make_date_naive(2024, 1, 2, 3, 4, 5)),
        false,
      ),
      record(
        metadata!("SourceFile": d.get_path("import/photo.mov").to_str().unwrap()),
        None,
        false,
      ),
    ];

    place_records(&records, &library).unwrap();

    let hash = hash_bytes("image bytes");
    assert!(
      d.get_path(format!("library/2024/01/02/2024.01.02_03.04.05-{hash}.heic"))
        .exists()
    );
    assert!(
      d.get_path(format!("library/2024/01/02/2024.01.02_03.04.05-{hash}.mov"))
        .exists()
    );
    // The paired video resolved a date, so no report is written.
    assert!(!d.get_path("library").join(NO_DATE_REPORT).exists());
  }

  #[test]
  fn reports_undated_files_in_input_order() {
    let d = test_dir!(
      "import/b.jpg": "image b",
      "import/a.jpg": "image a",
    );
    let library = d.get_path("library");
    fs::create_dir(&library).unwrap();
    let records = vec![
      record(
        metadata!("SourceFile": d.get_path("import/b.jpg").to_str().unwrap()),
        None,
        false,
      ),
      record(
        metadata!("SourceFile": d.get_path("import/a.jpg").to_str().unwrap()),
        None,
        false,
      ),
    ];

    place_records(&records, &library).unwrap();

    let report = fs::read_to_string(d.get_path("library").join(NO_DATE_REPORT)).unwrap();
    assert_eq!(
      report,
      format!(
        "{}\n{}\n",
        d.get_path("import/b.jpg").display(),
        d.get_path("import/a.jpg").display()
      )
    );
    assert!(
      d.get_path(format!("library/no-photo-taken-date/{}.jpg", hash_bytes("image a")))
        .exists()
    );
    assert!(
      d.get_path(format!("library/no-photo-taken-date/{}.jpg", hash_bytes("image b")))
        .exists()
    );
  }

  #[test]
  fn propagates_hashing_failure_and_aborts() {
    let d = test_dir!();
    let library = d.get_path("library");
    fs::create_dir(&library).unwrap();
    let records = vec![record(
      metadata!("SourceFile": d.get_path("missing.jpg").to_str().unwrap()),
      None,
      false,
    )];

    assert_err!(
      place_records(&records, &library),
      "Failed to open file for hashing"
    );
  }
}
