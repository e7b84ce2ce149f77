//! Offset-recording collector.

use std::io;

use super::Emitter;
use crate::annotate::{Annotation, Cursors, Insertion};

/// Records where each fragment belongs in the original text.
///
/// The driver moves the incoming cursor with [`OffsetRecorder::advance_to`]
/// before feeding each byte; markup is then recorded at that position and
/// visible text advances the outgoing cursor.
#[derive(Debug, Default)]
pub struct OffsetRecorder {
    cursors: Cursors,
    annotation: Annotation,
}

impl OffsetRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_to(&mut self, incoming: usize) {
        self.cursors.advance_to(incoming);
    }

    pub fn cursors(&self) -> &Cursors {
        &self.cursors
    }

    /// Hide any trailing invisible bytes and hand out the result.
    pub fn finish(mut self) -> Annotation {
        let end = self.cursors.incoming();
        self.cursors.sync(end, &mut self.annotation.hidden);
        self.annotation
    }
}

impl Emitter for OffsetRecorder {
    fn emit_markup(&mut self, fragment: &str) -> io::Result<()> {
        let point = self.cursors.incoming();
        self.cursors.sync(point, &mut self.annotation.hidden);
        self.annotation.insertions.push(Insertion {
            offset: point,
            insert_before_existing: fragment.starts_with("</"),
            markup: fragment.to_string(),
        });
        Ok(())
    }

    fn emit_invisible(&mut self) -> io::Result<()> {
        let point = self.cursors.incoming();
        self.cursors.sync(point, &mut self.annotation.hidden);
        Ok(())
    }

    fn emit_text(&mut self, text: &str) -> io::Result<()> {
        // Text always ends at the incoming cursor
        let start = self.cursors.incoming().saturating_sub(text.len());
        self.cursors.sync(start, &mut self.annotation.hidden);
        self.cursors.produced(text.len());
        Ok(())
    }
}
