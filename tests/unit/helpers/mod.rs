//! Test helper utilities

#![allow(dead_code)]

use proptest::prelude::*;

/// Check that every tag in `html` is closed in strict nesting order.
///
/// Returns the names of tags still open at the end, outermost first.
pub fn unclosed_tags(html: &str) -> Result<Vec<String>, String> {
    let mut open: Vec<String> = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        let end = rest[start..]
            .find('>')
            .map(|e| start + e)
            .ok_or_else(|| format!("unterminated tag in {:?}", html))?;
        let tag = &rest[start + 1..end];
        if let Some(name) = tag.strip_prefix('/') {
            match open.pop() {
                Some(top) if top == name => {}
                Some(top) => return Err(format!("</{}> closes <{}> in {:?}", name, top, html)),
                None => return Err(format!("</{}> without open tag in {:?}", name, html)),
            }
        } else {
            let name = tag.split_whitespace().next().unwrap_or_default();
            open.push(name.to_string());
        }
        rest = &rest[end + 1..];
    }
    Ok(open)
}

/// SGR parameter lists exercised by the generated lines.
pub const CODES: &[&str] = &[
    "0", "1", "3", "4", "8", "9", "21", "22", "23", "24", "28", "29", "31", "32", "39", "42",
    "44", "49", "51", "53", "54", "55", "93", "105", "", "38;5;2", "2", "7", "1;32",
];

/// Text runs mixed between the escape sequences.
pub const WORDS: &[&str] = &["tic", "tac", "toe", " ", "caf\u{e9}", "\u{2713}", "x", "\t"];

/// One SGR sequence or one text run.
pub fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(CODES).prop_map(|code| format!("\x1b[{}m", code)),
        prop::sample::select(WORDS).prop_map(String::from),
    ]
}

/// A line of up to `max` segments.
pub fn ansi_line(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 0..max).prop_map(|segments| segments.concat())
}
