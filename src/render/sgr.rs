//! SGR (Select Graphic Rendition) decoding.
//!
//! Turns the parameter list of a CSI m sequence into stack events:
//! - Attributes (bold, italic, underline, strikeout, framed, overline)
//! - Standard and bright foreground/background colors
//! - Conceal/reveal and reset
//!
//! Extended 256-color and RGB parameters are consumed and ignored, as is any
//! unknown code.

use std::iter::Peekable;
use std::slice;

use tracing::trace;

use super::element::{AttributeElement, Category};
use super::stack::Event;
use crate::palette::{AnsiColor, ColorPalette};

/// Decode SGR parameters into events.
///
/// Each entry is one parameter with its colon-separated sub-parameters, as
/// handed out by the vte parser. An empty list means reset.
pub fn decode(params: &[&[u16]], palette: &ColorPalette) -> Vec<Event> {
    if params.is_empty() {
        return vec![Event::ResetAll];
    }

    let mut events = Vec::new();
    let mut iter = params.iter().peekable();

    while let Some(group) = iter.next() {
        let code = group.first().copied().unwrap_or(0);
        let event = match code {
            0 => Some(Event::ResetAll),
            1 => Some(Event::Set(AttributeElement::bold())),
            3 => Some(Event::Set(AttributeElement::italic())),
            4 => Some(Event::Set(AttributeElement::underline())),
            8 => Some(Event::Conceal),
            9 => Some(Event::Set(AttributeElement::strikeout())),
            21 => Some(Event::Set(AttributeElement::underline_double())),
            22 => Some(Event::Reset(Category::Bold)),
            23 => Some(Event::Reset(Category::Italic)),
            24 => Some(Event::Reset(Category::Underline)),
            28 => Some(Event::Reveal),
            29 => Some(Event::Reset(Category::Strikeout)),
            30..=37 => Some(foreground(palette, code - 30, false)),
            38 | 48 => {
                skip_extended_color(group, &mut iter);
                None
            }
            39 => Some(Event::Reset(Category::Foreground)),
            40..=47 => Some(background(palette, code - 40, false)),
            49 => Some(Event::Reset(Category::Background)),
            51 => Some(Event::Set(AttributeElement::framed())),
            53 => Some(Event::Set(AttributeElement::overline())),
            54 => Some(Event::Reset(Category::Framed)),
            55 => Some(Event::Reset(Category::Overline)),
            90..=97 => Some(foreground(palette, code - 90, true)),
            100..=107 => Some(background(palette, code - 100, true)),
            _ => {
                trace!(code = code, "Ignoring unsupported SGR code");
                None
            }
        };
        events.extend(event);
    }

    events
}

fn foreground(palette: &ColorPalette, index: u16, bright: bool) -> Event {
    let color = color_for(index);
    Event::Set(AttributeElement::foreground(palette.color(color, bright)))
}

fn background(palette: &ColorPalette, index: u16, bright: bool) -> Event {
    let color = color_for(index);
    Event::Set(AttributeElement::background(palette.color(color, bright)))
}

fn color_for(index: u16) -> AnsiColor {
    // Callers only pass offsets from a matched 8-wide code range.
    AnsiColor::ALL[usize::from(index) & 7]
}

/// Consume the arguments of a 38/48 extended color.
///
/// Colon syntax (`38:5:n`) carries them as sub-parameters of the same
/// group; semicolon syntax (`38;5;n`, `38;2;r;g;b`) spreads them over the
/// following parameters.
fn skip_extended_color(group: &[u16], iter: &mut Peekable<slice::Iter<'_, &[u16]>>) {
    if group.len() > 1 {
        return;
    }
    let mode = iter.peek().and_then(|next| next.first().copied());
    let extra = match mode {
        Some(5) => 2,
        Some(2) => 4,
        _ => 0,
    };
    for _ in 0..extra {
        if iter.next().is_none() {
            break;
        }
    }
    trace!(mode = ?mode, "Ignoring extended color");
}
