// Copyright 2025 Seth Pendergrass. See LICENSE.

//! MD5 digests used as the stable file name component.
//!
//! The digest feeds the on-disk naming contract, so re-running over the same
//! inputs must reproduce identical names.

use std::{fs::File, io::Read, path::Path};

const READ_CHUNK_SIZE: usize = 1 << 20;

/// Hex digest of `bytes`. Used for Live Photo grouping tokens, which derive
/// their identity hash from the token text without any file I/O.
pub fn hash_bytes(bytes: impl AsRef<[u8]>) -> String {
  format!("{:x}", md5::compute(bytes.as_ref()))
}

/// Hex digest of the contents of `file`, streamed in chunks.
pub fn hash_file(file: impl AsRef<Path>) -> Result<String, String> {
  let file = file.as_ref();

  let mut handle = File::open(file)
    .map_err(|e| format!("{}: Failed to open file for hashing ({e}).", file.display()))?;

  let mut context = md5::Context::new();
  let mut buffer = vec![0u8; READ_CHUNK_SIZE];
  loop {
    let read = handle
      .read(&mut buffer)
      .map_err(|e| format!("{}: Failed to read file for hashing ({e}).", file.display()))?;
    if read == 0 {
      break;
    }
    context.consume(&buffer[..read]);
  }

  Ok(format!("{:x}", context.compute()))
}
