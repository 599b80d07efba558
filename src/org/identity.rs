// Copyright 2025 Seth Pendergrass. See LICENSE.

//! Final (date, confidence, identity hash) resolution for each record.

use std::path::PathBuf;

use chrono::NaiveDateTime;

use super::PairIndex;
use crate::{
  hash,
  prim::{Metadata, ResolvedDate},
};

/// The terminal form of one record, consumed by placement planning.
/// Constructed once; read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalRecord {
  pub source:        PathBuf,
  pub extension:     Option<String>,
  pub date_time:     Option<NaiveDateTime>,
  pub approx:        bool,
  pub identity_hash: String,
}

/// Combines a record's own resolved date with `PairIndex` lookups.
///
/// A record missing a date adopts the best candidate sharing its grouping
/// token, else the best candidate sharing its name key. The identity hash
/// prefers the token-derived hash (no file I/O), then the group's designated
/// photo's content hash, then the record's own content. Any given file's
/// content is hashed at most once per run; failure to read it aborts the
/// run.
pub fn finalize(
  metadata: &Metadata,
  resolved: ResolvedDate,
  index: &PairIndex,
) -> Result<FinalRecord, String> {
  let mut date_time = resolved.date_time;
  let mut approx = resolved.approx;

  if date_time.is_none() {
    let candidate = metadata
      .content_identifier
      .as_deref()
      .and_then(|token| index.token_candidate(token))
      .or_else(|| index.name_key_candidate(&metadata.name_key()));

    if let Some(candidate) = candidate {
      log::debug!("{metadata}: Adopting date from paired Live Photo file.");
      date_time = Some(candidate.date_time);
      approx = candidate.approx;
    }
  }

  let identity_hash = match metadata
    .content_identifier
    .as_deref()
    .and_then(|token| index.token_hash(token))
  {
    Some(hash) => hash.to_string(),
    None => match index.name_key_photo_hash(&metadata.name_key()) {
      Some(hash) => hash?,
      None => hash::hash_file(&metadata.source_file)?,
    },
  };

  Ok(FinalRecord {
    source: metadata.source_file.clone(),
    extension: metadata.extension(),
    date_time,
    approx,
    identity_hash,
  })
}
