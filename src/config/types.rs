//! Configuration type definitions and defaults

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Escape HTML special characters in log text
    #[serde(default = "default_escape_html")]
    pub escape_html: bool,
    /// Replace invalid UTF-8 instead of failing
    #[serde(default = "default_replace_invalid_utf8")]
    pub replace_invalid_utf8: bool,
}

pub fn default_escape_html() -> bool {
    true
}

pub fn default_replace_invalid_utf8() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            escape_html: default_escape_html(),
            replace_invalid_utf8: default_replace_invalid_utf8(),
        }
    }
}

/// Palette configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Built-in scheme the palette starts from
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Default foreground color index (0-7), overrides the scheme's
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_foreground: Option<u8>,
    /// Default background color index (0-7), overrides the scheme's
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_background: Option<u8>,
    /// Normal-intensity overrides keyed by color name or index
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub normal: BTreeMap<String, String>,
    /// Bright-intensity overrides keyed by color name or index
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub bright: BTreeMap<String, String>,
}

pub fn default_scheme() -> String {
    "xterm".to_string()
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            default_foreground: None,
            default_background: None,
            normal: BTreeMap::new(),
            bright: BTreeMap::new(),
        }
    }
}
