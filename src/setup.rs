// Copyright 2025 Seth Pendergrass. See LICENSE.

//! Program setup functions.

use std::{fs, io::Write, path::PathBuf};

use env_logger::Builder;
use log::LevelFilter;

/// Sets up `env_logger` with the format "LEVEL\tmessage".
///
/// Log levels:
/// Error: Program errors.
/// Warn: Files needing attention (e.g. no resolvable capture date).
/// Info: General program flow.
/// Debug: Per-file decisions.
/// Trace: `ExifTool` output.
pub fn configure_logging(verbosity: u8) {
  let level = match verbosity {
    0 => LevelFilter::Info,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };

  Builder::new()
    .filter_level(level)
    .format(|buf, record| {
      let style = buf.default_level_style(record.level());
      writeln!(buf, "{style}{}{style:#}\t{}", record.level(), record.args())
    })
    .init();
}

/// Gets the library root from the provided arg, if present, and writes it to
/// `XDG_CONFIG_HOME/livesort`. Else, reads the library root from
/// `XDG_CONFIG_HOME/livesort`.
pub fn get_or_update_library(path: Option<PathBuf>) -> Result<PathBuf, String> {
  let config_path = xdg::BaseDirectories::new()
    .get_config_file("livesort")
    .ok_or("Failed to get XDG config directory.".to_string())?;

  match path {
    Some(path) => {
      if !path.is_dir() {
        return Err(format!(
          "{}: Library path is not a directory.",
          path.display()
        ));
      }
      fs::write(
        config_path,
        path
          .to_str()
          .ok_or(format!("{}: Invalid library path.", path.display()))?,
      )
      .map_err(|e| format!("Failed to write library path ({e})."))?;
      Ok(path)
    }
    None => Ok(PathBuf::from(fs::read_to_string(config_path).map_err(
      |e| format!("Failed to read library path ({e}). Pass `-l` to set one."),
    )?)),
  }
}
