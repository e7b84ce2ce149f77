//! CLI tests
//!
//! Runs the ansilog binary end to end.

use predicates::prelude::*;
use serde_json::Value;

use super::helpers::{run_ansilog, Sandbox};

// ============================================================================
// render
// ============================================================================

#[test]
fn render_reads_stdin_and_escapes_by_default() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("render")
        .write_stdin("\x1b[32mok\x1b[0m <done>\n")
        .assert()
        .success()
        .stdout("<span style=\"color:#00CD00;\">ok</span> &lt;done&gt;\n");
}

#[test]
fn render_no_escape_keeps_markup_characters() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["render", "--no-escape"])
        .write_stdin("<em>\x1b[1mx\n")
        .assert()
        .success()
        .stdout("<em><b>x\n</b>");
}

#[test]
fn render_state_carries_across_lines() {
    let sandbox = Sandbox::new();
    let input = sandbox.write_file("build.log", b"\x1b[31mone\ntwo\x1b[39m\nthree\n");
    sandbox
        .cmd()
        .arg("render")
        .arg(&input)
        .assert()
        .success()
        .stdout(r#"<span style="color:#CD0000;">one
two</span>
three
"#);
}

#[test]
fn render_uses_palette_flag_and_config_defaults() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[palette]\nscheme = \"vga\"\n");
    sandbox
        .cmd()
        .arg("render")
        .write_stdin("x")
        .assert()
        .success()
        .stdout(r#"<span style="color:#AAAAAA;background-color:#000000;">x</span>"#);

    sandbox
        .cmd()
        .args(["render", "--palette", "css"])
        .write_stdin("\x1b[34mx")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<span style="color:blue;">x</span>"#));
}

#[test]
fn render_writes_output_file() {
    let sandbox = Sandbox::new();
    let out = sandbox.dir.path().join("out.html");
    sandbox
        .cmd()
        .arg("render")
        .arg("--output")
        .arg(&out)
        .write_stdin("\x1b[3mi\n")
        .assert()
        .success()
        .stdout("");
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "<i>i\n</i>");
}

#[test]
fn render_strict_rejects_invalid_utf8() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["render", "--strict"])
        .write_stdin(&b"ok\n\xffbad\n"[..])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid up to byte 3"));

    sandbox
        .cmd()
        .arg("render")
        .write_stdin(&b"\xffbad"[..])
        .assert()
        .success()
        .stdout("\u{fffd}bad");
}

#[test]
fn render_unknown_palette_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["render", "--palette", "amber"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown color scheme: amber"));
}

#[test]
fn render_missing_input_file_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["render", "does-not-exist.log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}

// ============================================================================
// annotate
// ============================================================================

#[test]
fn annotate_prints_one_json_record_per_line() {
    let sandbox = Sandbox::new();
    let assert = sandbox
        .cmd()
        .arg("annotate")
        .write_stdin("\x1b[1mhi\nplain\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let records: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["line"], 1);
    assert_eq!(records[0]["hidden"][0]["start"], 0);
    assert_eq!(records[0]["hidden"][0]["end"], 4);
    assert_eq!(records[0]["insertions"][0]["markup"], "<b>");
    assert_eq!(records[0]["insertions"][1]["markup"], "</b>");
    assert_eq!(records[0]["insertions"][1]["offset"], 6);
    assert_eq!(records[1]["line"], 2);
    assert_eq!(records[1]["insertions"].as_array().unwrap().len(), 0);
}

#[test]
fn annotate_replaces_invalid_utf8_like_render() {
    let sandbox = Sandbox::new();
    let assert = sandbox
        .cmd()
        .arg("annotate")
        .write_stdin(&b"\xff\x1b[1mok\n"[..])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let record: Value = serde_json::from_str(stdout.trim_end()).unwrap();
    // U+FFFD takes three bytes, so the bold sequence ends at byte 7
    assert_eq!(record["insertions"][0]["offset"], 7);

    sandbox.write_config("[render]\nreplace_invalid_utf8 = false\n");
    sandbox
        .cmd()
        .arg("annotate")
        .write_stdin(&b"ok\n\xff\n"[..])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 2 is not valid UTF-8"));
}

// ============================================================================
// palettes, completions, help
// ============================================================================

#[test]
fn palettes_marks_configured_scheme() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[palette]\nscheme = \"css\"\n");
    sandbox
        .cmd()
        .arg("palettes")
        .assert()
        .success()
        .stdout(predicate::str::contains("* css"))
        .stdout(predicate::str::contains("  xterm"))
        .stdout(predicate::str::contains("(default fg: 7, bg: 0)"));
}

#[test]
fn completions_generate_for_bash() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) =
        run_ansilog(&["completions", "--shell", "bash"], sandbox.dir.path());
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("ansilog"));
    assert!(stdout.contains("render"));
}

#[test]
fn help_lists_commands() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_ansilog(&["--help"], sandbox.dir.path());
    assert_eq!(exit_code, 0);
    for command in ["render", "annotate", "expand", "palettes", "completions"] {
        assert!(stdout.contains(command), "missing {} in:\n{}", command, stdout);
    }
}

#[test]
fn invalid_config_is_reported() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[palette]\nscheme = \"nope\"\n");
    sandbox
        .cmd()
        .arg("palettes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid palette in config file"));
}
