//! Opaque pass-through tokens.
//!
//! Upstream annotators embed self-delimited tokens in the log text:
//! `ESC[8mha:` + payload + `ESC[0m`. The preamble looks like a conceal
//! sequence, so tokens are split off before the text reaches the escape
//! parser and are copied to the output byte for byte.
//!
//! Tokens produced by this crate carry base64-encoded markup and can be
//! expanded back into HTML with [`expand`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Marks the start of an opaque token.
pub const PREAMBLE: &str = "\x1b[8mha:";
/// Marks the end of an opaque token.
pub const POSTAMBLE: &str = "\x1b[0m";

/// A run of ordinary text or one complete opaque token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Opaque(&'a str),
}

/// Iterator over the segments of a line.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

/// Split `text` into text runs and opaque tokens.
///
/// A preamble without a matching postamble is ordinary text.
pub fn split_segments(text: &str) -> Segments<'_> {
    Segments { rest: text }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let (segment, rest) = match self.rest.find(PREAMBLE) {
            Some(0) => match self.rest[PREAMBLE.len()..].find(POSTAMBLE) {
                Some(end) => {
                    let len = PREAMBLE.len() + end + POSTAMBLE.len();
                    (Segment::Opaque(&self.rest[..len]), &self.rest[len..])
                }
                None => (Segment::Text(self.rest), ""),
            },
            Some(start) => (Segment::Text(&self.rest[..start]), &self.rest[start..]),
            None => (Segment::Text(self.rest), ""),
        };
        self.rest = rest;
        Some(segment)
    }
}

/// Wrap a markup fragment in an opaque token.
pub fn encode(markup: &str) -> String {
    format!("{}{}{}", PREAMBLE, STANDARD.encode(markup), POSTAMBLE)
}

/// Recover the markup carried by a token produced by [`encode`].
pub fn decode(token: &str) -> Option<String> {
    let payload = token.strip_prefix(PREAMBLE)?.strip_suffix(POSTAMBLE)?;
    let bytes = STANDARD.decode(payload).ok()?;
    String::from_utf8(bytes).ok()
}

/// Replace every decodable token in `text` with the markup it carries.
///
/// Tokens from other producers are left untouched.
pub fn expand(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in split_segments(text) {
        match segment {
            Segment::Text(run) => out.push_str(run),
            Segment::Opaque(token) => match decode(token) {
                Some(markup) => out.push_str(&markup),
                None => out.push_str(token),
            },
        }
    }
    out
}
