// Copyright 2025 Seth Pendergrass. See LICENSE.

//! Thin wrappers around the filesystem and `ExifTool`. No resolution logic
//! lives here; the engine receives already-parsed records.

use std::{
  ffi::OsStr,
  fs,
  path::{Path, PathBuf},
  process::Command,
};

use walkdir::WalkDir;

use crate::prim::Metadata;

/// Recursively collects regular files under `dir`, sorted by file name for a
/// stable input order. Hidden files (e.g. `.DS_Store`) are skipped.
pub fn collect_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, String> {
  let dir = dir.as_ref();

  let mut files = Vec::new();
  for entry in WalkDir::new(dir).sort_by_file_name() {
    let entry =
      entry.map_err(|e| format!("{}: Failed to read directory ({e}).", dir.display()))?;

    if !entry.file_type().is_file() {
      continue;
    }
    if entry.file_name().to_string_lossy().starts_with('.') {
      log::debug!("{}: Hidden file. Ignoring.", entry.path().display());
      continue;
    }

    files.push(entry.into_path());
  }

  Ok(files)
}

/// Copies `file_src` to `file_dst`, creating parent directories as needed.
/// The copy lands under a temporary name and is renamed into place, so an
/// interrupted run never leaves a partial file at the target path.
pub fn copy_file(file_src: impl AsRef<Path>, file_dst: impl AsRef<Path>) -> Result<(), String> {
  let file_src = file_src.as_ref();
  let file_dst = file_dst.as_ref();

  let dir_dst = file_dst
    .parent()
    .ok_or(format!("{}: Target has no parent directory.", file_dst.display()))?;
  fs::create_dir_all(dir_dst)
    .map_err(|e| format!("{}: Failed to create directory ({e}).", dir_dst.display()))?;

  let mut name_tmp = file_dst
    .file_name()
    .ok_or(format!("{}: Target has no file name.", file_dst.display()))?
    .to_os_string();
  name_tmp.push(".part");
  let file_tmp = dir_dst.join(name_tmp);

  if let Err(e) = fs::copy(file_src, &file_tmp) {
    let _ = fs::remove_file(&file_tmp);
    return Err(format!(
      "{}: Failed to copy to {} ({e}).",
      file_src.display(),
      file_dst.display()
    ));
  }

  if let Err(e) = fs::rename(&file_tmp, file_dst) {
    let _ = fs::remove_file(&file_tmp);
    return Err(format!(
      "{}: Failed to move into place at {} ({e}).",
      file_src.display(),
      file_dst.display()
    ));
  }

  Ok(())
}

/// Reads metadata for `files` in one `ExifTool` invocation, returning one
/// record per path. Date & time tags keep `ExifTool`'s default
/// `YYYY:MM:DD HH:MM:SS` format.
pub fn read_metadata_batch(files: &[PathBuf]) -> Result<Vec<Metadata>, String> {
  if files.is_empty() {
    return Ok(Vec::new());
  }

  let mut args = Vec::from([OsStr::new("-json")]);
  args.extend(files.iter().map(|f| f.as_os_str()));

  let metadata = parse_batch(run_exiftool(args)?)?;
  if metadata.len() != files.len() {
    return Err(format!(
      "ExifTool returned {} records for {} files.",
      metadata.len(),
      files.len()
    ));
  }

  Ok(metadata)
}

/// Runs `ExifTool` with `args`.
fn run_exiftool<I: IntoIterator<Item = S>, S: AsRef<OsStr>>(args: I) -> Result<Vec<u8>, String> {
  let mut cmd = Command::new("exiftool");
  cmd.args(args);

  let output = cmd
    .output()
    .map_err(|e| format!("ExifTool failed to run ({e}). Is it installed?"))?;

  // ExifTool reports per-file problems on stderr but still emits the rest.
  if !output.stderr.is_empty() {
    log::trace!("ExifTool stderr:\n{}", String::from_utf8_lossy(&output.stderr));
  }

  if !output.status.success() {
    return Err(format!(
      "ExifTool did not run successfully.\nstderr:\n{}",
      String::from_utf8_lossy(&output.stderr)
    ));
  }

  Ok(output.stdout)
}

/// Parses `ExifTool`'s JSON-formatted output into metadata records.
fn parse_batch(stdout: impl AsRef<[u8]>) -> Result<Vec<Metadata>, String> {
  // `serde_json` doesn't handle the empty case.
  if stdout.as_ref().is_empty() {
    return Ok(Vec::new());
  }

  serde_json::from_slice(stdout.as_ref()).map_err(|e| {
    format!(
      "Failed to parse ExifTool output as metadata ({e}).\nstdout:\n{}",
      String::from_utf8_lossy(stdout.as_ref())
    )
  })
}
