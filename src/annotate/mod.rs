//! Offset-correlating annotator.
//!
//! Instead of rewriting a line, the annotator describes how to overlay HTML
//! onto the original ANSI-laden text: markup insertions at byte offsets plus
//! the byte ranges (the escape sequences themselves) to hide. Replaying both
//! against the line yields exactly what [`crate::render::convert`] renders.

mod cursor;

pub use cursor::Cursors;

use std::sync::Arc;

use serde::Serialize;

use crate::emit::OffsetRecorder;
use crate::error::RenderError;
use crate::palette::ColorPalette;
use crate::render::opaque::{split_segments, Segment};
use crate::render::HtmlRenderer;

/// Markup to splice into the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insertion {
    /// Byte offset in the original line
    pub offset: usize,
    /// Place before markup other annotators already put at this offset
    pub insert_before_existing: bool,
    pub markup: String,
}

/// Half-open byte range of the original line to render invisible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HideRange {
    pub start: usize,
    pub end: usize,
}

impl HideRange {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertions and hide-ranges for one line, both in ascending offset order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub insertions: Vec<Insertion>,
    pub hidden: Vec<HideRange>,
}

impl Annotation {
    pub fn is_empty(&self) -> bool {
        self.insertions.is_empty() && self.hidden.is_empty()
    }

    /// Overlay the annotation on `line` and drop the hidden bytes.
    ///
    /// Insertions past the end of the line are appended in order.
    pub fn apply(&self, line: &str) -> String {
        let bytes = line.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut insertions = self.insertions.iter().peekable();
        let mut hidden = self.hidden.iter().peekable();

        for pos in 0..=bytes.len() {
            while let Some(ins) = insertions.next_if(|ins| ins.offset <= pos) {
                out.extend_from_slice(ins.markup.as_bytes());
            }
            if pos == bytes.len() {
                break;
            }
            while hidden.next_if(|range| range.end <= pos).is_some() {}
            let is_hidden = hidden
                .peek()
                .is_some_and(|range| range.start <= pos && pos < range.end);
            if !is_hidden {
                out.push(bytes[pos]);
            }
        }
        for ins in insertions {
            out.extend_from_slice(ins.markup.as_bytes());
        }

        match String::from_utf8(out) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

/// Annotates lines against a shared palette.
///
/// Every call starts from a fresh attribute stack and fresh cursors, so one
/// annotator can serve many lines and many threads.
#[derive(Debug, Clone)]
pub struct Annotator {
    palette: Arc<ColorPalette>,
}

impl Annotator {
    pub fn new(palette: impl Into<Arc<ColorPalette>>) -> Self {
        Self {
            palette: palette.into(),
        }
    }

    /// Annotate one line of original text.
    pub fn annotate(&self, line: &str) -> Result<Annotation, RenderError> {
        let mut renderer = HtmlRenderer::new(OffsetRecorder::new(), Arc::clone(&self.palette));

        if !line.is_empty() {
            renderer.begin()?;
        }

        let mut offset = 0;
        for segment in split_segments(line) {
            match segment {
                Segment::Text(run) => {
                    let mut buf = [0; 4];
                    for (i, c) in run.char_indices() {
                        renderer.emitter_mut().advance_to(offset + i + c.len_utf8());
                        renderer.feed(c.encode_utf8(&mut buf).as_bytes())?;
                    }
                    offset += run.len();
                }
                Segment::Opaque(token) => {
                    offset += token.len();
                    renderer.emitter_mut().advance_to(offset);
                    renderer.feed_opaque(token)?;
                }
            }
        }

        renderer.emitter_mut().advance_to(line.len());
        Ok(renderer.finish()?.finish())
    }
}
