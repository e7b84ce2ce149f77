//! Emitter capability.
//!
//! The renderer never writes markup itself; it hands every fragment to an
//! [`Emitter`]. Three implementations are provided:
//! - writer: direct inline write into any `io::Write`
//! - lookup: pre-generated opaque tokens looked up by fragment (remoting)
//! - recorder: offset-recording collector used by the annotator

pub mod lookup;
pub mod recorder;
pub mod writer;

pub use lookup::{FragmentTable, LookupEmitter};
pub use recorder::OffsetRecorder;
pub use writer::WriteEmitter;

use std::io;

use crate::render::Fragment;

/// Sink for rendered output.
///
/// Calls are synchronous and may fail; failures propagate to the caller of
/// the current render operation.
pub trait Emitter {
    /// Called once per open or close tag.
    fn emit_markup(&mut self, fragment: &str) -> io::Result<()>;

    /// Called when a reset occurs with nothing open.
    fn emit_invisible(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Visible text, already escaped if escaping is enabled.
    fn emit_text(&mut self, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<E: Emitter + ?Sized> Emitter for &mut E {
    fn emit_markup(&mut self, fragment: &str) -> io::Result<()> {
        (**self).emit_markup(fragment)
    }

    fn emit_invisible(&mut self) -> io::Result<()> {
        (**self).emit_invisible()
    }

    fn emit_text(&mut self, text: &str) -> io::Result<()> {
        (**self).emit_text(text)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Collects everything into a string; never fails.
impl Emitter for String {
    fn emit_markup(&mut self, fragment: &str) -> io::Result<()> {
        self.push_str(fragment);
        Ok(())
    }

    fn emit_text(&mut self, text: &str) -> io::Result<()> {
        self.push_str(text);
        Ok(())
    }
}

/// Hand a batch of fragments to an emitter, in order.
///
/// Stops at the first failure.
pub fn emit_fragments<E: Emitter + ?Sized>(
    emitter: &mut E,
    fragments: &[Fragment],
) -> io::Result<()> {
    for fragment in fragments {
        match fragment {
            Fragment::Open(markup) | Fragment::Close(markup) => emitter.emit_markup(markup)?,
            Fragment::Invisible => emitter.emit_invisible()?,
            Fragment::Opaque(token) => emitter.emit_text(token)?,
        }
    }
    Ok(())
}
