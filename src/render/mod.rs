//! ANSI to HTML rendering.
//!
//! Drives a vte parser over the input, decodes SGR sequences into stack
//! events and hands the resulting markup and text to an [`Emitter`].
//! Opaque pass-through tokens are split off before parsing.

pub mod element;
pub mod opaque;
mod performer;
pub mod sgr;
pub mod stack;

pub use element::{AttributeElement, Category};
pub use stack::{AttributeStack, Event, Fragment};

use std::io;
use std::sync::Arc;

use vte::Parser;

use crate::emit::{emit_fragments, Emitter};
use crate::error::RenderError;
use crate::palette::ColorPalette;
use opaque::{split_segments, Segment};
use performer::HtmlPerformer;

/// Rendering switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `& < > " '` in visible text. Markup and opaque tokens are
    /// never escaped.
    pub escape_html: bool,
    /// Decode invalid UTF-8 with replacement characters instead of failing.
    pub replace_invalid_utf8: bool,
}

/// Streaming ANSI to HTML renderer.
///
/// State persists across writes until [`HtmlRenderer::finish`] closes every
/// open element. Each concurrent render needs its own renderer; the palette
/// is shared read-only.
pub struct HtmlRenderer<E: Emitter> {
    parser: Parser,
    stack: AttributeStack,
    palette: Arc<ColorPalette>,
    emitter: E,
    options: RenderOptions,
    /// Bytes of an incomplete line, held back so tokens are never split
    pending_line: Vec<u8>,
    /// Bytes already rendered, for error offsets
    consumed: usize,
}

impl<E: Emitter> HtmlRenderer<E> {
    pub fn new(emitter: E, palette: impl Into<Arc<ColorPalette>>) -> Self {
        let palette = palette.into();
        let stack = AttributeStack::new(AttributeElement::default_for(&palette));
        Self {
            parser: Parser::new(),
            stack,
            palette,
            emitter,
            options: RenderOptions::default(),
            pending_line: Vec::new(),
            consumed: 0,
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Open the default-color wrapper if it is not open yet.
    pub fn begin(&mut self) -> Result<(), RenderError> {
        let fragments = self.stack.begin();
        emit_fragments(&mut self.emitter, &fragments)?;
        Ok(())
    }

    /// Render decoded text immediately.
    pub fn render_str(&mut self, text: &str) -> Result<(), RenderError> {
        if text.is_empty() {
            return Ok(());
        }
        self.begin()?;
        for segment in split_segments(text) {
            match segment {
                Segment::Text(run) => self.feed(run.as_bytes())?,
                Segment::Opaque(token) => self.feed_opaque(token)?,
            }
        }
        Ok(())
    }

    /// Run raw bytes through the escape parser. No token splitting.
    pub(crate) fn feed(&mut self, bytes: &[u8]) -> Result<(), RenderError> {
        let mut performer = HtmlPerformer::new(
            &mut self.stack,
            &self.palette,
            &mut self.emitter,
            self.options.escape_html,
        );
        self.parser.advance(&mut performer, bytes);
        performer.finish()?;
        Ok(())
    }

    pub(crate) fn feed_opaque(&mut self, token: &str) -> Result<(), RenderError> {
        let fragments = self
            .stack
            .apply(Event::PassThroughOpaque(token.to_string()));
        emit_fragments(&mut self.emitter, &fragments)?;
        Ok(())
    }

    /// Render raw bytes, one complete line at a time.
    ///
    /// A trailing partial line is held until more bytes arrive or the
    /// renderer is finished.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), RenderError> {
        let mut rest = bytes;
        while let Some(pos) = rest.iter().position(|&b| b == b'\n') {
            self.pending_line.extend_from_slice(&rest[..=pos]);
            rest = &rest[pos + 1..];
            let line = std::mem::take(&mut self.pending_line);
            self.render_line_bytes(&line)?;
        }
        self.pending_line.extend_from_slice(rest);
        Ok(())
    }

    fn render_line_bytes(&mut self, line: &[u8]) -> Result<(), RenderError> {
        let offset = self.consumed;
        self.consumed += line.len();
        match std::str::from_utf8(line) {
            Ok(text) => self.render_str(text),
            Err(_) if self.options.replace_invalid_utf8 => {
                self.render_str(&String::from_utf8_lossy(line))
            }
            Err(e) => Err(RenderError::Encoding {
                valid_up_to: offset + e.valid_up_to(),
            }),
        }
    }

    /// Render any held-back bytes, close every open element and return the
    /// emitter.
    pub fn finish(mut self) -> Result<E, RenderError> {
        if !self.pending_line.is_empty() {
            let line = std::mem::take(&mut self.pending_line);
            self.render_line_bytes(&line)?;
        }
        let fragments = self.stack.close_all();
        emit_fragments(&mut self.emitter, &fragments)?;
        Ok(self.emitter)
    }

    pub fn stack(&self) -> &AttributeStack {
        &self.stack
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    pub fn emitter_mut(&mut self) -> &mut E {
        &mut self.emitter
    }
}

impl<E: Emitter> io::Write for HtmlRenderer<E> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf).map_err(into_io_error)?;
        Ok(buf.len())
    }

    /// Flushes the emitter; a held-back partial line stays buffered.
    fn flush(&mut self) -> io::Result<()> {
        self.emitter.flush()
    }
}

fn into_io_error(err: RenderError) -> io::Error {
    match err {
        RenderError::Emit(e) => e,
        other => io::Error::new(io::ErrorKind::InvalidData, other),
    }
}

/// Render `input` to an HTML string with default options.
pub fn convert(input: &str, palette: &ColorPalette) -> Result<String, RenderError> {
    convert_with_options(input, palette, RenderOptions::default())
}

pub fn convert_with_options(
    input: &str,
    palette: &ColorPalette,
    options: RenderOptions,
) -> Result<String, RenderError> {
    let mut renderer = HtmlRenderer::new(String::new(), palette.clone()).with_options(options);
    renderer.render_str(input)?;
    renderer.finish()
}

/// Render raw bytes, decoding them as UTF-8.
///
/// Fails with [`RenderError::Encoding`] on invalid input unless
/// `options.replace_invalid_utf8` is set.
pub fn convert_bytes(
    input: &[u8],
    palette: &ColorPalette,
    options: RenderOptions,
) -> Result<String, RenderError> {
    let mut renderer = HtmlRenderer::new(String::new(), palette.clone()).with_options(options);
    renderer.write_bytes(input)?;
    renderer.finish()
}
