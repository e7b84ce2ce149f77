//! Color palettes for HTML rendering.
//!
//! A palette maps the 8 standard ANSI colors, in normal and bright
//! intensity, to concrete CSS color strings. It may also name a default
//! foreground and background which wrap every rendered line.

use std::fmt;
use std::str::FromStr;

use crate::error::PaletteError;

/// The 8 standard ANSI base colors, in SGR order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiColor {
    pub const ALL: [AnsiColor; 8] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
    ];

    /// Color for a palette index (0-7).
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Names of the built-in schemes, in listing order.
pub const BUILTIN_SCHEMES: [&str; 4] = ["xterm", "vga", "css", "gnome-terminal"];

/// Immutable color table for one render session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    name: String,
    normal: [String; 8],
    bright: [String; 8],
    default_foreground: Option<u8>,
    default_background: Option<u8>,
}

fn table(colors: [&str; 8]) -> [String; 8] {
    colors.map(String::from)
}

impl ColorPalette {
    /// Build a palette, validating the default color indices.
    pub fn new(
        name: impl Into<String>,
        normal: [String; 8],
        bright: [String; 8],
        default_foreground: Option<u8>,
        default_background: Option<u8>,
    ) -> Result<Self, PaletteError> {
        for index in [default_foreground, default_background].into_iter().flatten() {
            if index > 7 {
                return Err(PaletteError::IndexOutOfRange { index });
            }
        }
        for (index, color) in normal.iter().chain(bright.iter()).enumerate() {
            if color.trim().is_empty() {
                return Err(PaletteError::EmptyColor {
                    index: (index % 8) as u8,
                });
            }
        }
        Ok(Self {
            name: name.into(),
            normal,
            bright,
            default_foreground,
            default_background,
        })
    }

    /// xterm colors, no default colors.
    pub fn xterm() -> Self {
        Self {
            name: "xterm".to_string(),
            normal: table([
                "#000000", "#CD0000", "#00CD00", "#CDCD00", "#1E90FF", "#CD00CD", "#00CDCD",
                "#E5E5E5",
            ]),
            bright: table([
                "#4C4C4C", "#FF0000", "#00FF00", "#FFFF00", "#4682B4", "#FF00FF", "#00FFFF",
                "#FFFFFF",
            ]),
            default_foreground: None,
            default_background: None,
        }
    }

    /// VGA text-mode colors, light gray on black.
    pub fn vga() -> Self {
        Self {
            name: "vga".to_string(),
            normal: table([
                "#000000", "#AA0000", "#00AA00", "#AA5500", "#0000AA", "#AA00AA", "#00AAAA",
                "#AAAAAA",
            ]),
            bright: table([
                "#555555", "#FF5555", "#55FF55", "#FFFF55", "#5555FF", "#FF55FF", "#55FFFF",
                "#FFFFFF",
            ]),
            default_foreground: Some(AnsiColor::White.index()),
            default_background: Some(AnsiColor::Black.index()),
        }
    }

    /// CSS color keywords; bright and normal share the same names.
    pub fn css() -> Self {
        let names = [
            "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
        ];
        Self {
            name: "css".to_string(),
            normal: table(names),
            bright: table(names),
            default_foreground: None,
            default_background: None,
        }
    }

    /// GNOME Terminal (Tango) colors.
    pub fn gnome_terminal() -> Self {
        Self {
            name: "gnome-terminal".to_string(),
            normal: table([
                "#2E3436", "#CC0000", "#4E9A06", "#C4A000", "#3465A4", "#75507B", "#06989A",
                "#D3D7CF",
            ]),
            bright: table([
                "#555753", "#EF2929", "#8AE234", "#FCE94F", "#729FCF", "#AD7FA8", "#34E2E2",
                "#EEEEEC",
            ]),
            default_foreground: None,
            default_background: None,
        }
    }

    /// Look up a built-in scheme by name.
    pub fn builtin(name: &str) -> Result<Self, PaletteError> {
        match name {
            "xterm" => Ok(Self::xterm()),
            "vga" => Ok(Self::vga()),
            "css" => Ok(Self::css()),
            "gnome-terminal" => Ok(Self::gnome_terminal()),
            _ => Err(PaletteError::UnknownScheme {
                name: name.to_string(),
                available: BUILTIN_SCHEMES.join(", "),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normal-intensity color for an index (0-7).
    pub fn normal_color(&self, index: u8) -> Option<&str> {
        self.normal.get(index as usize).map(String::as_str)
    }

    /// Bright-intensity color for an index (0-7).
    pub fn bright_color(&self, index: u8) -> Option<&str> {
        self.bright.get(index as usize).map(String::as_str)
    }

    pub fn color(&self, color: AnsiColor, bright: bool) -> &str {
        if bright {
            &self.bright[color.index() as usize]
        } else {
            &self.normal[color.index() as usize]
        }
    }

    pub fn default_foreground(&self) -> Option<u8> {
        self.default_foreground
    }

    pub fn default_background(&self) -> Option<u8> {
        self.default_background
    }

    /// Override the default colors, keeping the color tables.
    pub fn with_defaults(
        mut self,
        foreground: Option<u8>,
        background: Option<u8>,
    ) -> Result<Self, PaletteError> {
        for index in [foreground, background].into_iter().flatten() {
            if index > 7 {
                return Err(PaletteError::IndexOutOfRange { index });
            }
        }
        self.default_foreground = foreground;
        self.default_background = background;
        Ok(self)
    }

    /// Replace single table entries, as given in the config file.
    pub(crate) fn override_color(
        &mut self,
        index: u8,
        bright: bool,
        value: &str,
    ) -> Result<(), PaletteError> {
        if index > 7 {
            return Err(PaletteError::IndexOutOfRange { index });
        }
        if value.trim().is_empty() {
            return Err(PaletteError::EmptyColor { index });
        }
        let slot = if bright {
            &mut self.bright[index as usize]
        } else {
            &mut self.normal[index as usize]
        };
        *slot = value.trim().to_string();
        Ok(())
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::xterm()
    }
}

impl FromStr for ColorPalette {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::builtin(s)
    }
}

impl fmt::Display for ColorPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
