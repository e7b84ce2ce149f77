//! Pre-generated fragment lookup.
//!
//! When rendering happens on a remote build agent, raw markup cannot travel
//! over the log channel. Each fragment is instead written as an opaque token
//! that the receiving side expands with [`crate::render::opaque::expand`].
//! Tokens for every element a palette can produce are generated once and
//! shared read-only between renders.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Arc;

use tracing::debug;

use super::Emitter;
use crate::palette::{AnsiColor, ColorPalette};
use crate::render::element::AttributeElement;
use crate::render::opaque;

/// Fragment markup to pre-encoded token.
#[derive(Debug, Clone, Default)]
pub struct FragmentTable {
    tokens: HashMap<String, String>,
}

impl FragmentTable {
    /// Generate tokens for every element `palette` can produce.
    pub fn for_palette(palette: &ColorPalette) -> Self {
        let mut elements = vec![
            AttributeElement::bold(),
            AttributeElement::italic(),
            AttributeElement::underline(),
            AttributeElement::underline_double(),
            AttributeElement::strikeout(),
            AttributeElement::framed(),
            AttributeElement::overline(),
        ];
        for color in AnsiColor::ALL {
            for bright in [false, true] {
                let value = palette.color(color, bright);
                elements.push(AttributeElement::foreground(value));
                elements.push(AttributeElement::background(value));
            }
        }
        elements.extend(AttributeElement::default_for(palette));

        let mut table = Self::default();
        for element in &elements {
            table.insert(element.open_markup());
            table.insert(element.close_markup());
        }
        table
    }

    fn insert(&mut self, markup: &str) {
        self.tokens
            .entry(markup.to_string())
            .or_insert_with(|| opaque::encode(markup));
    }

    pub fn lookup(&self, fragment: &str) -> Option<&str> {
        self.tokens.get(fragment).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Writes fragments as opaque tokens and text as-is.
#[derive(Debug)]
pub struct LookupEmitter<W: Write> {
    inner: W,
    table: Arc<FragmentTable>,
    misses: usize,
}

impl<W: Write> LookupEmitter<W> {
    pub fn new(inner: W, table: Arc<FragmentTable>) -> Self {
        Self {
            inner,
            table,
            misses: 0,
        }
    }

    /// Fragments that had to be encoded on the fly.
    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Emitter for LookupEmitter<W> {
    fn emit_markup(&mut self, fragment: &str) -> io::Result<()> {
        match self.table.lookup(fragment) {
            Some(token) => self.inner.write_all(token.as_bytes()),
            None => {
                self.misses += 1;
                debug!(fragment = %fragment, "Fragment not in lookup table, encoding");
                self.inner.write_all(opaque::encode(fragment).as_bytes())
            }
        }
    }

    fn emit_text(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
