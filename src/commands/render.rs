//! Render command handler.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use ansilog::{Config, Emitter, FragmentTable, HtmlRenderer, LookupEmitter, WriteEmitter};

use super::{open_input, resolve_palette};

/// Arguments of `ansilog render`.
pub struct RenderArgs<'a> {
    pub file: Option<&'a Path>,
    pub output: Option<&'a Path>,
    pub palette: Option<&'a str>,
    pub no_escape: bool,
    pub strict: bool,
    pub remote: bool,
}

#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, args: &RenderArgs<'_>) -> Result<()> {
    let palette = resolve_palette(config, args.palette)?;
    let mut options = config.render_options();
    if args.no_escape {
        options.escape_html = false;
    }
    if args.strict {
        options.replace_invalid_utf8 = false;
    }
    debug!(palette = %palette, ?options, remote = args.remote, "Rendering");

    let out: Box<dyn Write> = match args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let out = BufWriter::new(out);
    let input = open_input(args.file)?;

    if args.remote {
        let table = Arc::new(FragmentTable::for_palette(&palette));
        let renderer =
            HtmlRenderer::new(LookupEmitter::new(out, table), palette).with_options(options);
        let emitter = pump(input, renderer)?;
        if emitter.misses() > 0 {
            debug!(misses = emitter.misses(), "Fragments encoded on the fly");
        }
        emitter.into_inner().flush()?;
    } else {
        let renderer = HtmlRenderer::new(WriteEmitter::new(out), palette).with_options(options);
        pump(input, renderer)?.into_inner().flush()?;
    }
    Ok(())
}

/// Stream all input through the renderer and finish it.
pub fn pump<E: Emitter>(mut input: Box<dyn BufRead>, mut renderer: HtmlRenderer<E>) -> Result<E> {
    let mut line = Vec::new();
    loop {
        line.clear();
        let n = input
            .read_until(b'\n', &mut line)
            .context("Failed to read input")?;
        if n == 0 {
            break;
        }
        renderer.write_bytes(&line).context("Failed to render input")?;
    }
    renderer.finish().context("Failed to render input")
}
