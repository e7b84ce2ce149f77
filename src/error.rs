//! Rendering and palette errors.

/// Errors surfaced while rendering ANSI text.
///
/// Malformed or unrecognized escape sequences are never errors; they are
/// skipped so the remainder of the log still renders.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to write rendered output: {0}")]
    Emit(#[from] std::io::Error),

    #[error("Input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    Encoding { valid_up_to: usize },
}

/// Errors raised while building a color palette.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("Unknown color scheme: {name}. Available: {available}")]
    UnknownScheme { name: String, available: String },

    #[error("Color index out of range: {index} (expected 0-7)")]
    IndexOutOfRange { index: u8 },

    #[error("Empty color value for index {index}")]
    EmptyColor { index: u8 },
}
