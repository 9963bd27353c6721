//! Analyze command - aggregate an export and print the metrics bundle.

use std::path::PathBuf;

use adpulse::{LoaderConfig, MetricsBundle, MetricsEngine, Rating, read_rows_from_path};
use colored::Colorize;

use crate::cli::OutputFormat;

pub fn run(
    file: PathBuf,
    delimiter: char,
    format: OutputFormat,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }
    if !delimiter.is_ascii() {
        return Err(format!("Delimiter must be a single ASCII character: {delimiter:?}").into());
    }

    let config = LoaderConfig {
        delimiter: delimiter as u8,
        ..LoaderConfig::default()
    };
    let rows = read_rows_from_path(&file, &config)?;

    if verbose {
        println!(
            "{} {} ({} rows)",
            "Analyzing".cyan().bold(),
            file.display().to_string().white(),
            rows.len()
        );
    }

    let bundle = MetricsEngine::new().analyze(&rows);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&bundle)?),
        OutputFormat::Summary => print_summary(&bundle),
    }

    Ok(())
}

fn print_summary(bundle: &MetricsBundle) {
    let totals = &bundle.totals;

    println!();
    println!("{}", "Key metrics".yellow().bold());
    println!("  Spend        {:>12.2}", totals.spend);
    println!("  Revenue      {:>12.2}", totals.revenue);
    println!("  Impressions  {:>12.0}", totals.impressions);
    println!("  Clicks       {:>12.0}", totals.clicks);
    println!("  Conversions  {:>12.1}", totals.conversions);
    println!("  CTR          {:>11.2}%", totals.ctr);
    println!("  CPC          {:>12.2}", totals.cpc);
    println!("  CPA          {:>12.2}", totals.cpa);
    println!("  CPM          {:>12.2}", totals.cpm);
    println!("  ROAS         {:>12.2}", totals.roas);

    println!();
    println!(
        "{} {} days tracked",
        "Trends".yellow().bold(),
        bundle.trends.len()
    );

    let score = &bundle.score;
    let value = score.value.to_string();
    let value = match score.rating {
        Rating::Excellent => value.green().bold(),
        Rating::Good => value.green(),
        Rating::Average => value.yellow(),
        Rating::Critical => value.red().bold(),
    };

    println!();
    println!(
        "{} {}/100 ({:?}, {:?} confidence)",
        "Score".yellow().bold(),
        value,
        score.rating,
        score.confidence
    );
    println!(
        "  performance {:>5.1}  delivery {:>5.1}  creative {:>5.1}  structure {:>5.1}",
        score.breakdown.performance,
        score.breakdown.delivery,
        score.breakdown.creative,
        score.breakdown.structure
    );
}
