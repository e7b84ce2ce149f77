//! Annotate command handler.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use ansilog::{Annotation, Annotator, Config};

use super::{open_input, resolve_palette};

/// One output record: the 1-based line number and its annotation.
#[derive(Serialize)]
struct LineAnnotation<'a> {
    line: usize,
    #[serde(flatten)]
    annotation: &'a Annotation,
}

#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, file: Option<&Path>, palette: Option<&str>) -> Result<()> {
    let palette = resolve_palette(config, palette)?;
    let annotator = Annotator::new(palette);
    let lossy = config.render_options().replace_invalid_utf8;
    let mut input = open_input(file)?;
    let mut out = io::stdout().lock();
    let mut buf = Vec::new();
    let mut number = 0;

    loop {
        buf.clear();
        let n = input
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read line {}", number + 1))?;
        if n == 0 {
            break;
        }
        number += 1;
        let line = decode_line(&buf, lossy)
            .with_context(|| format!("Line {} is not valid UTF-8", number))?;
        let annotation = annotator
            .annotate(&line)
            .with_context(|| format!("Failed to annotate line {}", number))?;
        let record = LineAnnotation {
            line: number,
            annotation: &annotation,
        };
        serde_json::to_writer(&mut out, &record).context("Failed to serialize annotation")?;
        writeln!(out)?;
    }
    Ok(())
}

/// Strip the line terminator and decode, replacing invalid UTF-8 if `lossy`.
fn decode_line(buf: &[u8], lossy: bool) -> Result<Cow<'_, str>> {
    let bytes = buf.strip_suffix(b"\n").unwrap_or(buf);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    if lossy {
        return Ok(String::from_utf8_lossy(bytes));
    }
    Ok(Cow::Borrowed(std::str::from_utf8(bytes)?))
}
