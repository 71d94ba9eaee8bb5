//! GeoGrant CLI - Interactive management of geographic distribution rights
//!
//! This CLI loads a geography catalog from CSV and lets an operator:
//! - Create distributors and sub-distributors with region grants
//! - Check which regions a distributor may serve
//! - List distributors with their effective grants
//! - Inspect the catalog and validate region names

use clap::{Parser, Subcommand};
use geogrant_catalog::{load_csv, GeoCatalog};
use geogrant_registry::DistributorRegistry;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;
mod prompt;
mod session;

use commands::{catalog, interactive, validate};
use config::CliConfig;
pub use error::{CliError, CliResult};
use output::OutputFormat;
use session::Session;

/// GeoGrant CLI application
#[derive(Parser)]
#[command(name = "geogrant")]
#[command(about = "GeoGrant - Hierarchical distributor access grants", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "GEOGRANT_CONFIG")]
    config: Option<PathBuf>,

    /// Geography CSV file
    #[arg(long, env = "GEOGRANT_CITIES")]
    cities: Option<PathBuf>,

    /// Output format (table, json, yaml)
    #[arg(short, long)]
    output: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Interactive,

    /// Show geography catalog statistics
    Catalog,

    /// Validate a comma-separated list of regions
    Validate {
        /// Regions, e.g. "India, Chennai-Tamil Nadu-India"
        regions: String,
    },

    /// Show configuration
    Config,
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;
    let format = config.output_format(cli.output);
    let cities_path = config.cities_path(cli.cities.as_deref());

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Config => show_config(&config, &cities_path, format),
        Commands::Catalog => {
            let catalog = load_catalog(&cities_path, &config)?;
            catalog::execute(&catalog, &cities_path, format)
        }
        Commands::Validate { regions } => {
            let catalog = load_catalog(&cities_path, &config)?;
            validate::execute(&catalog, &regions, format)
        }
        Commands::Interactive => {
            let catalog = load_catalog(&cities_path, &config)?;
            let mut session = Session::new(DistributorRegistry::new(catalog), format);
            interactive::execute(&mut session)
        }
    }
}

/// Build the geography catalog; failure ends the run
fn load_catalog(path: &Path, config: &CliConfig) -> CliResult<Arc<GeoCatalog>> {
    let catalog = load_csv(path, &config.columns)?;
    info!(path = %path.display(), "Geography catalog ready");
    Ok(Arc::new(catalog))
}

fn show_config(config: &CliConfig, cities_path: &Path, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            println!("Cities: {}", cities_path.display());
            println!(
                "Columns: city={}, state={}, country={}",
                config.columns.city, config.columns.state, config.columns.country
            );
            println!("Output: {:?}", format);
            Ok(())
        }
        format => output::print_single(config, format),
    }
}
