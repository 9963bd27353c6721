//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Adpulse: campaign metrics aggregation and scoring engine
#[derive(Parser)]
#[command(name = "adpulse")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate a campaign export and print metrics, trends, and score
    Analyze {
        /// Path to the export file (CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Field delimiter of the export
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        /// Output format
        #[arg(short, long, default_value = "summary")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal summary
    Summary,
    /// Full bundle as pretty JSON
    Json,
}
