// Copyright 2025 Seth Pendergrass. See LICENSE.

//! Batch-wide lookup structures pairing Live Photo images and videos.
//!
//! Two independent grouping strategies are required: some capture pipelines
//! provide a `ContentIdentifier` linking a Live Photo's image and video,
//! while others leave only matching base file names in the same directory.

use std::{
  cell::RefCell,
  collections::{HashMap, hash_map::Entry},
  path::PathBuf,
};

use chrono::NaiveDateTime;

use crate::{
  hash,
  prim::{Metadata, ResolvedDate},
};

/// The most confident dated photo seen so far for one identity key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestCandidate {
  pub date_time: NaiveDateTime,
  pub approx:    bool,
}

impl BestCandidate {
  /// An exact date replaces an approximate one. Equally confident candidates
  /// keep whichever was encountered first, so input order is significant.
  fn supersedes(self, current: BestCandidate) -> bool {
    !self.approx && current.approx
  }
}

struct TokenEntry {
  identity_hash: String,
  best:          Option<BestCandidate>,
}

struct NameKeyEntry {
  best:  BestCandidate,
  photo: PathBuf,
  // Compute-once cell, filled the first time any member of the group needs
  // the designated photo's content hash.
  photo_hash: RefCell<Option<String>>,
}

/// Lookup structures built in a single pass over a full batch, in stable
/// input order, used to recover missing dates and to share one identity hash
/// across paired files. Must be fully built before any record is finalized;
/// consumed read-only afterward.
#[derive(Default)]
pub struct PairIndex {
  tokens:    HashMap<String, TokenEntry>,
  name_keys: HashMap<String, NameKeyEntry>,
}

impl PairIndex {
  pub fn build(records: &[(Metadata, ResolvedDate)]) -> Self {
    let mut index = Self::default();
    for (metadata, resolved) in records {
      index.insert(metadata, *resolved);
    }
    index
  }

  /// The most confident dated photo sharing `token`, if any.
  pub fn token_candidate(&self, token: &str) -> Option<BestCandidate> {
    self.tokens.get(token).and_then(|e| e.best)
  }

  /// The identity hash for `token`, derived from the token text itself.
  /// Every file carrying the token shares it, videos included, without any
  /// of their content ever being read.
  pub fn token_hash(&self, token: &str) -> Option<&str> {
    self.tokens.get(token).map(|e| e.identity_hash.as_str())
  }

  /// The most confident dated photo sharing `name_key`, if any.
  pub fn name_key_candidate(&self, name_key: &str) -> Option<BestCandidate> {
    self.name_keys.get(name_key).map(|e| e.best)
  }

  /// The content hash of the designated photo for `name_key`, computed on
  /// first need and cached for every other member of the group.
  pub fn name_key_photo_hash(&self, name_key: &str) -> Option<Result<String, String>> {
    let entry = self.name_keys.get(name_key)?;

    if let Some(hash) = entry.photo_hash.borrow().as_ref() {
      return Some(Ok(hash.clone()));
    }

    let hash = match hash::hash_file(&entry.photo) {
      Ok(hash) => hash,
      Err(e) => return Some(Err(e)),
    };
    entry.photo_hash.borrow_mut().replace(hash.clone());

    Some(Ok(hash))
  }

  fn insert(&mut self, metadata: &Metadata, resolved: ResolvedDate) {
    if let Some(token) = &metadata.content_identifier {
      self.tokens.entry(token.clone()).or_insert_with(|| {
        log::debug!("{metadata}: Live Photo token {token}.");
        TokenEntry {
          identity_hash: hash::hash_bytes(token),
          best:          None,
        }
      });
    }

    // Only dated photos nominate candidates; videos and undated files can
    // adopt a candidate's date but never provide one.
    let Some(date_time) = resolved.date_time else {
      return;
    };
    if !metadata.is_photo() {
      return;
    }

    let candidate = BestCandidate {
      date_time,
      approx: resolved.approx,
    };

    if let Some(token) = &metadata.content_identifier {
      let entry = self.tokens.get_mut(token).unwrap();
      if entry.best.is_none_or(|best| candidate.supersedes(best)) {
        entry.best = Some(candidate);
      }
    }

    match self.name_keys.entry(metadata.name_key()) {
      Entry::Vacant(vacant) => {
        vacant.insert(NameKeyEntry {
          best:       candidate,
          photo:      metadata.source_file.clone(),
          photo_hash: RefCell::new(None),
        });
      }
      Entry::Occupied(mut occupied) => {
        if candidate.supersedes(occupied.get().best) {
          let entry = occupied.get_mut();
          entry.best = candidate;
          entry.photo = metadata.source_file.clone();
          *entry.photo_hash.get_mut() = None;
        }
      }
    }
  }
}
