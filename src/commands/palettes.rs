//! Palettes command handler.

use anyhow::Result;

use ansilog::palette::{AnsiColor, BUILTIN_SCHEMES};
use ansilog::{ColorPalette, Config};

#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config) -> Result<()> {
    for name in BUILTIN_SCHEMES {
        let palette = ColorPalette::builtin(name)?;
        let marker = if config.palette.scheme == name { "*" } else { " " };
        println!("{} {}", marker, describe(&palette));
    }
    Ok(())
}

/// One-line summary of a palette.
pub fn describe(palette: &ColorPalette) -> String {
    let normal: Vec<&str> = AnsiColor::ALL
        .iter()
        .map(|c| palette.color(*c, false))
        .collect();
    let defaults = match (palette.default_foreground(), palette.default_background()) {
        (None, None) => String::new(),
        (fg, bg) => format!(
            " (default fg: {}, bg: {})",
            fg.map_or("-".to_string(), |i| i.to_string()),
            bg.map_or("-".to_string(), |i| i.to_string())
        ),
    };
    format!("{:<15} {}{}", palette.name(), normal.join(" "), defaults)
}
