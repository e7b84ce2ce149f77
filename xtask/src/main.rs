//! xtask - Build tasks for ansilog
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use ansilog::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for ansilog")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // If no specific format is specified, generate all
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    use clap_mangen::Man;

    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();

    let man = Man::new(cmd.clone());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("ansilog.1"), buffer)?;
    println!("Generated: {}/ansilog.1", man_dir.display());

    for subcommand in cmd.get_subcommands() {
        if subcommand.is_hide_set() {
            continue;
        }

        let name = subcommand.get_name();
        let man = Man::new(subcommand.clone());
        let mut buffer = Vec::new();
        man.render(&mut buffer)?;
        fs::write(man_dir.join(format!("ansilog-{}.1", name)), buffer)?;
        println!("Generated: {}/ansilog-{}.1", man_dir.display(), name);
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# ansilog Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");

    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str("```\n");
        markdown.push_str(&format!("{}\n", long_about));
        markdown.push_str("```\n\n");
    }

    for subcommand in cmd.get_subcommands() {
        if subcommand.is_hide_set() {
            continue;
        }

        let name = subcommand.get_name();
        markdown.push_str(&format!("## ansilog {}\n\n", name));

        match (subcommand.get_long_about(), subcommand.get_about()) {
            (Some(long_about), _) => {
                markdown.push_str("```\n");
                markdown.push_str(&format!("{}\n", long_about));
                markdown.push_str("```\n\n");
            }
            (None, Some(about)) => markdown.push_str(&format!("{}\n\n", about)),
            (None, None) => {}
        }

        let args: Vec<_> = subcommand
            .get_arguments()
            .filter(|a| !matches!(a.get_id().as_str(), "help" | "version"))
            .collect();
        if !args.is_empty() {
            markdown.push_str("### Arguments\n\n");
            for arg in args {
                let label = match arg.get_long() {
                    Some(long) => format!("--{}", long),
                    None => format!("<{}>", arg.get_id().as_str().to_uppercase()),
                };
                markdown.push_str(&format!("- `{}`", label));
                if let Some(help) = arg.get_help() {
                    markdown.push_str(&format!(": {}", help));
                }
                markdown.push('\n');
            }
            markdown.push('\n');
        }
    }

    let path = output.join("COMMANDS.md");
    fs::write(&path, markdown).context("Failed to write COMMANDS.md")?;
    println!("Generated: {}", path.display());
    Ok(())
}
