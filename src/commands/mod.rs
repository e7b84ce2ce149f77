//! Command handlers for the ansilog CLI.
//!
//! Each submodule handles a specific CLI command.
//! The main dispatch logic remains in main.rs.

pub mod annotate;
pub mod completions;
pub mod expand;
pub mod palettes;
pub mod render;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use ansilog::{ColorPalette, Config};

/// Open FILE for buffered reading, or stdin when no file is given.
pub fn open_input(file: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match file {
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Ok(Box::new(BufReader::new(f)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Configured palette, with an optional scheme from the command line.
///
/// A scheme given on the command line replaces the configured one; the
/// configured default colors and overrides still apply on top of it.
pub fn resolve_palette(config: &Config, scheme: Option<&str>) -> Result<ColorPalette> {
    match scheme {
        Some(name) => {
            let mut config = config.clone();
            config.palette.scheme = name.to_string();
            config.palette()
        }
        None => config.palette(),
    }
}
