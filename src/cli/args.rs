//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Barback - what can I make tonight?
///
/// Tracks which cocktails are makeable from the ingredients in stock,
/// substituting bases, brands and listed alternatives where allowed.
#[derive(Parser, Debug)]
#[command(name = "barback")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BARBACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog file path
    #[arg(long, global = true, env = "BARBACK_CATALOG")]
    pub catalog: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List cocktails that can be made right now
    Available(AvailableArgs),

    /// List ingredients with the number of makeable cocktails using them
    Ingredients(IngredientsArgs),

    /// Show how each line of a cocktail resolves
    Explain(ExplainArgs),

    /// Mark an ingredient as in stock (or out of stock with --off)
    Stock(StockArgs),

    /// Replace the catalog with the contents of a JSON file
    Import(ImportArgs),

    /// Print the availability fingerprint of the ingredient list
    Fingerprint,

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Policy overrides shared by commands that evaluate availability
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct PolicyArgs {
    /// Allow base and brand substitution for every recipe line
    #[arg(long)]
    pub allow_substitutes: bool,

    /// Ignore garnish lines
    #[arg(long)]
    pub ignore_garnish: bool,
}

/// Arguments for the available command
#[derive(Parser, Debug)]
pub struct AvailableArgs {
    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the ingredients command
#[derive(Parser, Debug)]
pub struct IngredientsArgs {
    /// Only show ingredients in stock
    #[arg(long)]
    pub in_stock: bool,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the explain command
#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// Cocktail id or name
    pub cocktail: String,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Arguments for the stock command
#[derive(Parser, Debug)]
pub struct StockArgs {
    /// Ingredient id or name
    pub ingredient: String,

    /// Mark as out of stock
    #[arg(long)]
    pub off: bool,
}

/// Arguments for the import command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Catalog JSON file to import
    pub file: PathBuf,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., policy.ignore_garnish)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Output format for listing commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}
