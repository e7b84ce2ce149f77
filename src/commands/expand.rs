//! Expand command handler.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use ansilog::render::opaque;

use super::open_input;

#[cfg(not(tarpaulin_include))]
pub fn handle(file: Option<&Path>) -> Result<()> {
    let mut input = open_input(file)?;
    let mut out = io::stdout().lock();
    let mut line = String::new();

    loop {
        line.clear();
        let n = input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if n == 0 {
            break;
        }
        out.write_all(opaque::expand(&line).as_bytes())?;
    }
    out.flush()?;
    Ok(())
}
