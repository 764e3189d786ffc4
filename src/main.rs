//! Barback CLI entry point that dispatches to subcommands.

use barback::cli::{Cli, Commands};
use barback::config::{Config, ConfigManager};
use barback::error::BarbackResult;
use barback::store::CatalogStore;
use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> BarbackResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load().await?;

    init_logging(cli.verbose, &config);
    barback::ui::init_theme();

    let catalog_path = ConfigManager::catalog_path(&config, cli.catalog.as_deref());
    debug!("Using catalog {}", catalog_path.display());
    let store = CatalogStore::new(catalog_path);

    match cli.command {
        Commands::Available(args) => barback::cli::commands::available(args, &config, &store).await,
        Commands::Ingredients(args) => {
            barback::cli::commands::ingredients(args, &config, &store).await
        }
        Commands::Explain(args) => barback::cli::commands::explain(args, &config, &store).await,
        Commands::Stock(args) => barback::cli::commands::stock(args, &config, &store).await,
        Commands::Import(args) => barback::cli::commands::import(args, &config, &store).await,
        Commands::Fingerprint => barback::cli::commands::fingerprint(&config, &store).await,
        Commands::Config(args) => {
            barback::cli::commands::config(args, &config, &config_manager).await
        }
    }
}

/// 0 = warn, 1 = info, 2+ = debug; `general.log_format = "json"` for JSON lines
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::new("barback=warn"),
        1 => EnvFilter::new("barback=info"),
        _ => EnvFilter::new("barback=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
