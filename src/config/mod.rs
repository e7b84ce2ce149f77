//! Configuration management for ansilog

mod io;
mod types;

pub use types::*;

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use crate::palette::{AnsiColor, ColorPalette};
use crate::render::RenderOptions;

impl Config {
    /// Get the config file path (~/.config/ansilog/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            escape_html: self.render.escape_html,
            replace_invalid_utf8: self.render.replace_invalid_utf8,
        }
    }

    /// Build the palette: the named scheme, then default colors, then
    /// per-color overrides.
    pub fn palette(&self) -> Result<ColorPalette> {
        let mut palette = ColorPalette::builtin(&self.palette.scheme)?;

        if self.palette.default_foreground.is_some() || self.palette.default_background.is_some()
        {
            let fg = self
                .palette
                .default_foreground
                .or(palette.default_foreground());
            let bg = self
                .palette
                .default_background
                .or(palette.default_background());
            palette = palette.with_defaults(fg, bg)?;
        }

        for (bright, overrides) in [(false, &self.palette.normal), (true, &self.palette.bright)] {
            for (key, value) in overrides {
                let index = parse_color_key(key)?;
                palette.override_color(index, bright, value)?;
            }
        }

        Ok(palette)
    }
}

/// Accept a color name (`red`) or an index (`1`).
fn parse_color_key(key: &str) -> Result<u8> {
    const NAMES: [&str; 8] = [
        "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
    ];
    let key = key.trim().to_ascii_lowercase();
    if let Some(pos) = NAMES.iter().position(|name| *name == key) {
        return Ok(AnsiColor::ALL[pos].index());
    }
    match key.parse::<u8>() {
        Ok(index) if index < 8 => Ok(index),
        _ => bail!(
            "Unknown color '{}'. Use a name ({}) or an index 0-7",
            key,
            NAMES.join(", ")
        ),
    }
}
