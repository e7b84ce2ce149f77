//! CLI definitions for ansilog
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for man page generation.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Version string, with the git commit for development builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "ansilog")]
#[command(about = "Render ANSI-colored build logs as inline HTML")]
#[command(long_about = "ansilog - Render ANSI SGR escape sequences as well-formed inline HTML.

Colors, bold, italic, underline, strikeout, framed and overline attributes
are turned into strictly nested HTML elements, so the output can be embedded
into a larger page without breaking its structure.

QUICK START:
    ansilog render build.log > build.html     Render a log file
    make 2>&1 | ansilog render                Render from stdin
    ansilog annotate build.log                Print offset annotations as JSON
    ansilog palettes                          List color schemes

CONFIGURATION:
    ~/.config/ansilog/config.toml")]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Config file to use instead of ~/.config/ansilog/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a log to HTML
    #[command(long_about = "Render a log to HTML.

Reads FILE (or stdin) line by line and writes HTML to stdout or --output.
Attribute state carries across lines; everything still open is closed at
the end of the input.

EXAMPLES:
    ansilog render build.log                  Render with the configured palette
    ansilog render build.log --palette vga    Use the VGA color scheme
    ansilog render --no-escape < log.txt      Keep <, > and & as-is
    ansilog render build.log --remote         Emit markup as opaque tokens")]
    Render {
        /// Input file (stdin if omitted)
        file: Option<PathBuf>,
        /// Write HTML to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Color scheme (xterm, vga, css, gnome-terminal)
        #[arg(long, short)]
        palette: Option<String>,
        /// Do not escape HTML special characters in the log text
        #[arg(long)]
        no_escape: bool,
        /// Fail on invalid UTF-8 instead of replacing it
        #[arg(long)]
        strict: bool,
        /// Emit each tag as an opaque token for later expansion
        #[arg(long)]
        remote: bool,
    },

    /// Print offset annotations for each line as JSON
    #[command(long_about = "Print offset annotations for each line as JSON.

For every input line, prints one JSON object with the markup insertions and
hidden byte ranges that turn the original line into HTML. Offsets are byte
offsets into the line, without its trailing newline. Each line is annotated
independently.

EXAMPLE:
    ansilog annotate build.log | jq .")]
    Annotate {
        /// Input file (stdin if omitted)
        file: Option<PathBuf>,
        /// Color scheme (xterm, vga, css, gnome-terminal)
        #[arg(long, short)]
        palette: Option<String>,
    },

    /// Replace opaque tokens produced by `render --remote` with their markup
    Expand {
        /// Input file (stdin if omitted)
        file: Option<PathBuf>,
    },

    /// List built-in color schemes
    Palettes,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}
