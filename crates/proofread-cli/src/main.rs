//! Proofread CLI - Command-line grammar and style checker for documents.

use clap::Parser;
use proofread_cli::commands;
use proofread_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> proofread_cli::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for results
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env(|key| std::env::var(key).ok())?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Check(args) => {
            commands::execute_check(args, &mut config, &formatter).await?;
        }
        Command::Extract(args) => {
            commands::execute_extract(args).await?;
        }
        Command::Formats => {
            commands::execute_formats(&formatter).await?;
        }
        Command::Config(args) => {
            let config_path = Config::resolve_path(cli.config.as_deref())?;
            commands::execute_config(args, &config, &config_path, &formatter).await?;
        }
    }

    Ok(())
}
