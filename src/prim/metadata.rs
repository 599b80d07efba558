// Copyright 2025 Seth Pendergrass. See LICENSE.

//! `ExifTool` metadata records for media files.

use core::fmt;
use std::{
  fmt::{Display, Formatter},
  path::{Path, PathBuf},
};

use serde::Deserialize;

/// Extensions treated as photos when pairing Live Photo images with videos.
/// Closed set; matched case-insensitively.
const PHOTO_EXTENSIONS: [&str; 10] = [
  "dng", "gif", "heic", "heif", "jpeg", "jpg", "png", "tif", "tiff", "webp",
];

/// Metadata for an image or video file, as extracted by `ExifTool`.
///
/// Names are from `ExifTool`'s tags: <https://exiftool.org/TagNames/>.
/// Date & time tags keep `ExifTool`'s default `YYYY:MM:DD HH:MM:SS` lexical
/// form (optionally with sub-seconds and/or a UTC offset); they are parsed
/// lazily so a malformed value is indistinguishable from an absent one.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Metadata {
  pub source_file: PathBuf,

  // Links a Live Photo image to its paired video.
  pub content_identifier: Option<String>,

  // High-confidence capture times, in precedence order.
  pub sub_sec_date_time_original: Option<String>,
  pub date_time_original:         Option<String>,
  pub sub_sec_create_date:        Option<String>,
  pub create_date:                Option<String>,
  pub date_time_created:          Option<String>,
  pub media_create_date:          Option<String>,

  // Medium-confidence fallbacks, in precedence order. Container or transfer
  // timestamps, so only trusted when recovery is requested.
  pub creation_date:    Option<String>,
  pub metadata_date:    Option<String>,
  pub modify_date:      Option<String>,
  pub file_modify_date: Option<String>,
}

impl Metadata {
  /// The file's extension, case preserved as encountered.
  pub fn extension(&self) -> Option<String> {
    self
      .source_file
      .extension()
      .map(|e| e.to_string_lossy().into_owned())
  }

  /// Whether the extension classifies this file as a photo.
  pub fn is_photo(&self) -> bool {
    self
      .source_file
      .extension()
      .is_some_and(|e| PHOTO_EXTENSIONS.contains(&e.to_string_lossy().to_lowercase().as_str()))
  }

  /// Fallback grouping key for Live Photo pairs without a
  /// `ContentIdentifier`: lowercased parent directory + lowercased file stem.
  /// `dir/photo.heic` and `dir/PHOTO.MOV` share a key.
  pub fn name_key(&self) -> String {
    let parent = self
      .source_file
      .parent()
      .map(|p| p.to_string_lossy().to_lowercase())
      .unwrap_or_default();
    let stem = self
      .source_file
      .file_stem()
      .map(|s| s.to_string_lossy().to_lowercase())
      .unwrap_or_default();

    format!("{parent}/{stem}")
  }
}

impl AsRef<Path> for Metadata {
  fn as_ref(&self) -> &Path {
    &self.source_file
  }
}

impl Display for Metadata {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.source_file.display())
  }
}
