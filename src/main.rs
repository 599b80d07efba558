//! Sorts batches of photos and videos into a date- and content-addressed
//! library, keeping Live Photo image & video pairs together.
//!
//! Copyright 2025 Seth Pendergrass. See LICENSE.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

mod hash;
mod io;
mod org;
mod prim;
mod setup;
#[cfg(test)]
mod testing;

#[derive(Parser)]
struct Args {
  /// Directory of photos & videos to sort into the library.
  import: PathBuf,

  /// Directory of the organized library. Updates default in XDG_CONFIG_HOME.
  #[arg(short, long)]
  library: Option<PathBuf>,

  /// Fall back to lower-confidence metadata dates (e.g. `ModifyDate`) for
  /// files without a capture date.
  #[arg(short, long)]
  recover_date: bool,

  /// Verbosity level. Max: 2.
  #[arg(short, action = ArgAction::Count)]
  verbose: u8,
}

fn main() {
  let args = Args::parse();
  setup::configure_logging(args.verbose);

  let library = match setup::get_or_update_library(args.library) {
    Ok(path) => path,
    Err(e) => {
      log::error!("{e}");
      std::process::exit(1);
    }
  };

  if let Err(e) = org::organize(&args.import, &library, args.recover_date) {
    log::error!("{e}");
    std::process::exit(1);
  }
}
