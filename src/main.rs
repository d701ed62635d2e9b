use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use emailql::cli::handlers::{self, CommandContext};
use emailql::cli::{Cli, Commands};
use emailql::config::EmailqlConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    emailql::logging::init(cli.verbose, cli.log_file.clone());

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Init { force } => handlers::handle_init(force),
        Commands::Serve { host, port } => handlers::handle_serve(load_context(config)?, host, port),
        Commands::Query { query, variables } => {
            handlers::handle_query(load_context(config)?, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handlers::handle_mutate(load_context(config)?, mutation, variables),
        Commands::Schema { output } => handlers::handle_schema(load_context(config)?, output),
    }
}

fn load_context(config: Option<&Path>) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let (config, config_path) =
        EmailqlConfig::load(config, &cwd).context("Failed to load emailql configuration")?;
    Ok(CommandContext::new(config, config_path))
}
