//! Dual-cursor bookkeeping for one annotated line.

use super::HideRange;

/// Byte cursors correlating the original text with the visible output.
///
/// `incoming` counts bytes consumed from the ANSI-laden line, `outgoing`
/// counts visible bytes produced, and `adjustment` counts bytes already
/// marked hidden. Outside of escape sequences
/// `incoming == outgoing + adjustment`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursors {
    incoming: usize,
    outgoing: usize,
    adjustment: usize,
    /// Last position hide bookkeeping ran for
    last_point: Option<usize>,
}

impl Cursors {
    pub fn incoming(&self) -> usize {
        self.incoming
    }

    pub fn outgoing(&self) -> usize {
        self.outgoing
    }

    pub fn adjustment(&self) -> usize {
        self.adjustment
    }

    pub(crate) fn advance_to(&mut self, incoming: usize) {
        self.incoming = incoming;
    }

    pub(crate) fn produced(&mut self, len: usize) {
        self.outgoing += len;
    }

    /// Hide whatever the original text advanced past without visible output.
    ///
    /// Runs at most once per point, so several fragments emitted for one
    /// control sequence share a single hide range.
    pub(crate) fn sync(&mut self, point: usize, hidden: &mut Vec<HideRange>) {
        if self.last_point == Some(point) {
            return;
        }
        self.last_point = Some(point);

        let visible_end = self.outgoing + self.adjustment;
        if point > visible_end {
            hidden.push(HideRange {
                start: visible_end,
                end: point,
            });
            self.adjustment += point - visible_end;
        }
    }
}
