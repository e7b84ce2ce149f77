//! Remoting tests: opaque tokens now, expansion later

use std::sync::Arc;

use predicates::prelude::*;

use ansilog::render::opaque;
use ansilog::{convert, ColorPalette, FragmentTable, HtmlRenderer, LookupEmitter};

use super::helpers::Sandbox;

const LOG: &str = "\x1b[32mtic\x1b[1mtac\x1b[39mtoe\x1b[0m\n\x1b[41mbg\x1b[49m done\n";

#[test]
fn lookup_tokens_expand_to_inline_rendering() {
    let palette = ColorPalette::xterm();
    let table = Arc::new(FragmentTable::for_palette(&palette));
    let mut renderer = HtmlRenderer::new(LookupEmitter::new(Vec::new(), table), palette.clone());
    renderer.write_bytes(LOG.as_bytes()).unwrap();
    let emitter = renderer.finish().unwrap();
    assert_eq!(emitter.misses(), 0);

    let remote = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(!remote.contains('<'), "markup leaked: {}", remote);
    assert_eq!(opaque::expand(&remote), convert(LOG, &palette).unwrap());
}

#[test]
fn cli_remote_render_then_expand() {
    let sandbox = Sandbox::new();
    let assert = sandbox
        .cmd()
        .args(["render", "--remote", "--no-escape"])
        .write_stdin(LOG)
        .assert()
        .success()
        .stdout(predicate::str::contains(opaque::PREAMBLE));
    let remote = assert.get_output().stdout.clone();

    let expected = convert(LOG, &ColorPalette::xterm()).unwrap();
    sandbox
        .cmd()
        .arg("expand")
        .write_stdin(remote)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn foreign_tokens_survive_render_and_expand() {
    let foreign = format!("{}not-base64!{}", opaque::PREAMBLE, opaque::POSTAMBLE);
    let line = format!("\x1b[1m{foreign}\n");
    let html = convert(&line, &ColorPalette::xterm()).unwrap();
    assert_eq!(html, format!("<b>{foreign}\n</b>"));
    assert_eq!(opaque::expand(&html), html);
}
