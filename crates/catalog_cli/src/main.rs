//! Component Catalog CLI
//!
//! Browse the catalog tree, open demos, inspect the components grid and run
//! headless theme-propagation scenarios.

mod commands;

use anyhow::Result;
use catalog_app::CatalogConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Component catalog with live theme propagation")]
#[command(version)]
struct Cli {
    /// Config file, or a directory containing catalog.toml
    #[arg(short, long, global = true, default_value = ".")]
    config: PathBuf,

    /// Log filter; RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_filter: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the catalog navigation tree
    Tree,

    /// List a component's demos, primary demos first
    Demos {
        /// Top-level component title
        component: String,
    },

    /// Open a component and print the themed example
    Open {
        component: String,

        /// Demo row to open within the component
        #[arg(short, long, default_value = "0")]
        demo: usize,
    },

    /// Show the components grid layout for the configured device
    Grid {
        /// Override the configured viewport width
        #[arg(long)]
        width: Option<f32>,

        /// Override the configured viewport height
        #[arg(long)]
        height: Option<f32>,
    },

    /// Print the configured color scheme
    Scheme {
        /// Use a built-in preset instead of the configured theme
        #[arg(long)]
        preset: Option<String>,
    },

    /// Run a headless scenario against the theme previewer
    Preview {
        /// Scenario JSON file
        scenario: PathBuf,

        /// Write the report to this relative path instead of stdout
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

fn init_logging(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CatalogConfig::load_from_path(&cli.config)?;

    let filter = cli.log_filter.as_deref().unwrap_or(&config.logging.filter);
    init_logging(filter);
    tracing::debug!(config = %cli.config.display(), "configuration loaded");

    match cli.command {
        Commands::Tree => commands::tree(&config),
        Commands::Demos { component } => commands::demos(&config, &component),
        Commands::Open { component, demo } => commands::open(&config, &component, demo),
        Commands::Grid { width, height } => commands::grid(&config, width, height),
        Commands::Scheme { preset } => commands::scheme(&config, preset.as_deref()),
        Commands::Preview { scenario, report } => {
            commands::preview(&config, &scenario, report.as_deref())
        }
    }
}
