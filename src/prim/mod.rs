// Copyright 2025 Seth Pendergrass. See LICENSE.

//! Primitive types for media file metadata and capture-date resolution.

mod dates;
mod metadata;

pub use dates::*;
pub use metadata::*;
