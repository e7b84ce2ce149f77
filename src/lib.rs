//! ansilog Library
//!
//! Renders ANSI SGR escape sequences in build logs as well-formed inline
//! HTML, either by rewriting the text or by producing offset-positioned
//! markup to overlay on the original.

pub mod annotate;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod palette;
pub mod render;

pub use annotate::{Annotation, Annotator, HideRange, Insertion};
pub use config::Config;
pub use emit::{Emitter, FragmentTable, LookupEmitter, OffsetRecorder, WriteEmitter};
pub use error::{PaletteError, RenderError};
pub use palette::{AnsiColor, ColorPalette};
pub use render::{convert, convert_bytes, convert_with_options, HtmlRenderer, RenderOptions};
