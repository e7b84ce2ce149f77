//! VTE performer implementation.
//!
//! Contains the `HtmlPerformer` struct that implements the vte::Perform trait.
//! SGR sequences are decoded into stack events, printable characters become
//! visible text and every other control sequence is dropped.

use std::io;

use tracing::trace;
use vte::{Params, Perform};

use super::sgr;
use super::stack::{AttributeStack, Fragment};
use crate::emit::{emit_fragments, Emitter};
use crate::palette::ColorPalette;

/// Performer that handles VTE callbacks and feeds the emitter.
pub(crate) struct HtmlPerformer<'a, E: Emitter> {
    stack: &'a mut AttributeStack,
    palette: &'a ColorPalette,
    emitter: &'a mut E,
    escape_html: bool,
    /// Visible text not yet handed to the emitter
    pending: String,
    /// First emitter failure; later output is dropped, stack updates are not
    error: Option<io::Error>,
}

impl<'a, E: Emitter> HtmlPerformer<'a, E> {
    pub fn new(
        stack: &'a mut AttributeStack,
        palette: &'a ColorPalette,
        emitter: &'a mut E,
        escape_html: bool,
    ) -> Self {
        Self {
            stack,
            palette,
            emitter,
            escape_html,
            pending: String::new(),
            error: None,
        }
    }

    fn push_char(&mut self, c: char) {
        if !self.escape_html {
            self.pending.push(c);
            return;
        }
        match c {
            '&' => self.pending.push_str("&amp;"),
            '<' => self.pending.push_str("&lt;"),
            '>' => self.pending.push_str("&gt;"),
            '"' => self.pending.push_str("&quot;"),
            '\'' => self.pending.push_str("&#39;"),
            _ => self.pending.push(c),
        }
    }

    fn flush_text(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending);
        if self.error.is_none() {
            if let Err(e) = self.emitter.emit_text(&text) {
                self.error = Some(e);
            }
        }
    }

    fn emit(&mut self, fragments: &[Fragment]) {
        self.flush_text();
        if self.error.is_none() {
            if let Err(e) = emit_fragments(&mut *self.emitter, fragments) {
                self.error = Some(e);
            }
        }
    }

    /// Flush buffered text and report the first emitter failure.
    pub fn finish(mut self) -> io::Result<()> {
        self.flush_text();
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<E: Emitter> Perform for HtmlPerformer<'_, E> {
    fn print(&mut self, c: char) {
        if ('\u{80}'..='\u{9f}').contains(&c) {
            trace!(code = u32::from(c), "Dropping C1 control character");
            return;
        }
        if !self.stack.is_concealed() {
            self.push_char(c);
        }
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            // Layout controls stay visible even while concealed
            b'\t' | b'\n' | b'\r' => self.pending.push(char::from(byte)),
            _ => trace!(byte = byte, "Dropping control character"),
        }
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {}

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, params: &[&[u8]], _bell_terminated: bool) {
        trace!(params = params.len(), "Dropping OSC sequence");
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], _ignore: bool, action: char) {
        if action != 'm' || !intermediates.is_empty() {
            let flat: Vec<u16> = params
                .iter()
                .map(|p| p.first().copied().unwrap_or(0))
                .collect();
            trace!(
                action = %action,
                params = ?flat,
                intermediates = ?intermediates,
                "Dropping non-SGR CSI sequence"
            );
            return;
        }

        let groups: Vec<&[u16]> = params.iter().collect();
        for event in sgr::decode(&groups, self.palette) {
            let fragments = self.stack.apply(event);
            if !fragments.is_empty() {
                self.emit(&fragments);
            }
        }
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], _ignore: bool, byte: u8) {
        trace!(
            byte = byte,
            byte_char = %char::from(byte),
            intermediates = ?intermediates,
            "Dropping ESC sequence"
        );
    }
}
