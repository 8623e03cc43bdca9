//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Config;
use crate::logging::init_logging;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;

    init_logging(&config.logging, cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Flag beats config file beats pretty
    let output_format = cli.output.or(config.output_format).unwrap_or_default();

    let ctx = commands::Context {
        config,
        config_path,
        output_format,
    };

    match cli.command {
        Commands::Serve(args) => commands::serve::execute(ctx, args).await,
        Commands::Whois(args) => commands::whois::execute(ctx, args).await,
        Commands::Dns(args) => commands::dns::execute(ctx, args).await,
        Commands::Reverse(args) => commands::reverse::execute(ctx, args).await,
        Commands::Analyze(args) => commands::analyze::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(ctx, args),
    }
}
