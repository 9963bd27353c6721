//! Adpulse CLI - campaign metrics aggregation and scoring.

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            file,
            delimiter,
            format,
        } => commands::analyze::run(file, delimiter, format, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
