//! GLR CLI - Fill General Loss Report templates from inspection reports.

use clap::Parser;
use glr_cli::commands;
use glr_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> glr_cli::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let config = Config::load(cli.config.as_deref())?;

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Fill(args) => commands::execute_fill(args, &config, &formatter).await?,
        Command::Placeholders(args) => commands::execute_placeholders(args, &formatter)?,
        Command::Extract(args) => commands::execute_extract(args, &config, &formatter)?,
    }

    Ok(())
}
