//! ansilog - CLI entry point

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use ansilog::cli::{Cli, Commands};
use ansilog::Config;

fn init_logging(verbose: bool) {
    let default = if verbose { "ansilog=debug" } else { "ansilog=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Render {
            file,
            output,
            palette,
            no_escape,
            strict,
            remote,
        } => {
            let config = load_config(&cli)?;
            let opts = commands::render::RenderArgs {
                file: file.as_deref(),
                output: output.as_deref(),
                palette: palette.as_deref(),
                no_escape: *no_escape,
                strict: *strict,
                remote: *remote,
            };
            commands::render::handle(&config, &opts)
        }
        Commands::Annotate { file, palette } => {
            let config = load_config(&cli)?;
            commands::annotate::handle(&config, file.as_deref(), palette.as_deref())
        }
        Commands::Expand { file } => commands::expand::handle(file.as_deref()),
        Commands::Palettes => {
            let config = load_config(&cli)?;
            commands::palettes::handle(&config)
        }
        Commands::Completions { shell } => commands::completions::handle(&mut Cli::command(), *shell),
    }
}
