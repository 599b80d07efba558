// Copyright 2025 Seth Pendergrass. See LICENSE.

//! The resolution-and-grouping engine: pairs Live Photo files, finalizes
//! each record's date and identity hash, and decides placement.

mod identity;
mod organizer;
mod pairing;
mod placement;
mod report;

pub use identity::*;
pub use organizer::*;
pub use pairing::*;
pub use placement::*;
pub use report::*;
