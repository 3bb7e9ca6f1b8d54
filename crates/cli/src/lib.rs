mod find;
mod shell;
mod show;
mod surface;

use assetmap_api::models::ViewportClass;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "assetmap",
    version,
    about = "A map-based dashboard for browsing a real-estate asset catalog",
    long_about = "Assetmap loads a fixed catalog of real-estate assets and drives an \
                  interactive dashboard over it: keyword search, a colored marker map \
                  and a per-asset detail panel, kept in sync on every state change."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
pub enum CliViewport {
    Desktop,
    Mobile,
}

impl From<CliViewport> for ViewportClass {
    fn from(viewport: CliViewport) -> Self {
        match viewport {
            CliViewport::Desktop => ViewportClass::Desktop,
            CliViewport::Mobile => ViewportClass::Mobile,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog once and print the matching assets
    #[command(
        long_about = "Runs the keyword filter once against the catalog and prints the \
                            matching assets as a table. Keywords combine with AND and match \
                            case-insensitively against name, address, category, landmarks, \
                            roads, leasing contact and management unit."
    )]
    Find {
        /// Path to the asset catalog (JSON array)
        #[arg(value_name = "DATA_PATH")]
        data: PathBuf,
        /// Keywords, combined with AND
        #[arg(value_name = "KEYWORD", required = true)]
        keywords: Vec<String>,
    },
    /// Print the detail panel for a single asset
    Show {
        /// Path to the asset catalog (JSON array)
        #[arg(value_name = "DATA_PATH")]
        data: PathBuf,
        /// Asset id
        id: u32,
        /// Emit the raw record as JSON instead of the formatted panel
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive dashboard session
    #[command(
        long_about = "Starts an interactive session over the catalog: search, select and \
                            hover assets while the terminal map surface and the list/detail \
                            panels stay in sync with the session state."
    )]
    Shell {
        /// Path to the asset catalog (JSON array)
        #[arg(value_name = "DATA_PATH")]
        data: PathBuf,
        /// Layout class governing panel precedence
        #[arg(long, value_enum, default_value = "desktop")]
        viewport: CliViewport,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _guard = assetmap_core::logging::init_logging("cli", false);

    match cli.command {
        Commands::Find { data, keywords } => find::run(&data, &keywords),
        Commands::Show { data, id, json } => show::run(&data, id, json),
        Commands::Shell { data, viewport } => shell::run(&data, viewport.into()),
    }
}
