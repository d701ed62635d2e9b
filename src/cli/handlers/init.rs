use crate::config::EmailqlConfig;
use anyhow::{Context, Result};
use colored::Colorize;

pub fn handle_init(force: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path =
        EmailqlConfig::init(&cwd, force).context("Failed to write emailql configuration")?;

    println!(
        "{} emailql config in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());

    Ok(())
}
