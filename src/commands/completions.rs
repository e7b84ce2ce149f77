//! Completions command handler

use anyhow::Result;
use clap::Command;
use clap_complete::{generate, Shell as CompletionShell};
use std::io;

/// Generate shell completion scripts.
#[cfg(not(tarpaulin_include))]
pub fn handle(cmd: &mut Command, shell: CompletionShell) -> Result<()> {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut io::stdout());
    Ok(())
}
