//! Direct inline writer.

use std::io::{self, Write};

use super::Emitter;

/// Writes markup and text straight into an `io::Write`.
#[derive(Debug)]
pub struct WriteEmitter<W: Write> {
    inner: W,
}

impl<W: Write> WriteEmitter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Emitter for WriteEmitter<W> {
    fn emit_markup(&mut self, fragment: &str) -> io::Result<()> {
        self.inner.write_all(fragment.as_bytes())
    }

    fn emit_text(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
