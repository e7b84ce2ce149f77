//! Rendering tests: scenarios and well-formedness

use ansilog::render::opaque;
use ansilog::{convert, convert_with_options, ColorPalette, RenderOptions};

use proptest::prelude::*;

use super::helpers::{ansi_line, unclosed_tags};

fn render(input: &str) -> String {
    convert(input, &ColorPalette::xterm()).unwrap()
}

#[test]
fn bold_hello_world() {
    insta::assert_snapshot!(render("\x1b[1mhello world"), @"<b>hello world</b>");
}

#[test]
fn green_then_bold_then_default_foreground() {
    insta::assert_snapshot!(
        render("\x1b[32mtic\x1b[1mtac\x1b[39mtoe"),
        @r#"<span style="color:#00CD00;">tic<b>tac</b></span><b>toe</b>"#
    );
}

#[test]
fn buried_reset_keeps_remaining_attributes() {
    insta::assert_snapshot!(
        render("\x1b[32mg\x1b[1mb\x1b[4mu\x1b[39mrest"),
        @r#"<span style="color:#00CD00;">g<b>b<u>u</u></b></span><b><u>rest</u></b>"#
    );
}

#[test]
fn color_change_replaces_open_color() {
    insta::assert_snapshot!(
        render("\x1b[31mred\x1b[34mblue"),
        @r#"<span style="color:#CD0000;">red</span><span style="color:#1E90FF;">blue</span>"#
    );
}

#[test]
fn background_and_foreground_are_independent() {
    insta::assert_snapshot!(
        render("\x1b[41;37mx\x1b[49my"),
        @r#"<span style="background-color:#CD0000;"><span style="color:#E5E5E5;">x</span></span><span style="color:#E5E5E5;">y</span>"#
    );
}

#[test]
fn decorations_render_as_styled_spans() {
    insta::assert_snapshot!(
        render("\x1b[9ms\x1b[29m\x1b[51mf\x1b[54m\x1b[53mo\x1b[55m\x1b[21md"),
        @r#"<span style="text-decoration:line-through;">s</span><span style="border:1px solid;">f</span><span style="text-decoration:overline;">o</span><span style="border-bottom:3px double;">d</span>"#
    );
}

#[test]
fn unknown_and_truncated_sequences_do_not_abort() {
    assert_eq!(render("a\x1b[999;5;7mb\x1b[38;2mc\x1b[1"), "abc");
}

#[test]
fn c1_control_characters_are_dropped() {
    assert_eq!(render("\u{9b}1mX"), "1mX");
    assert_eq!(render("a\u{85}b\u{9f}"), "ab");
}

#[test]
fn concealment_resumes_after_reveal() {
    assert_eq!(render("\x1b[8m\x1b[1mhidden\x1b[28mshown"), "<b>shown</b>");
}

#[test]
fn opaque_token_is_reproduced_byte_for_byte() {
    let token = opaque::encode("<a href=\"#x\">");
    let input = format!("\x1b[1mbefore {token} after");
    assert_eq!(render(&input), format!("<b>before {token} after</b>"));
}

#[test]
fn escape_option_leaves_tokens_alone() {
    let token = "\x1b[8mha:<&>\x1b[0m";
    let options = RenderOptions {
        escape_html: true,
        ..RenderOptions::default()
    };
    let html =
        convert_with_options(&format!("<{token}>"), &ColorPalette::xterm(), options).unwrap();
    assert_eq!(html, format!("&lt;{token}&gt;"));
}

proptest! {
    #[test]
    fn random_sequences_always_render_well_formed(line in ansi_line(24), vga in any::<bool>()) {
        let palette = if vga { ColorPalette::vga() } else { ColorPalette::xterm() };
        let html = convert(&line, &palette).unwrap();
        let open = unclosed_tags(&html).map_err(TestCaseError::fail)?;
        prop_assert!(open.is_empty(), "unclosed {:?} for {:?}", open, line);
        prop_assert!(!html.contains('\x1b'), "escape leaked for {:?}", line);
    }
}
