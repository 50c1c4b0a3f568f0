use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use waypoint_export::config::FileConfig;
use waypoint_export::domain::sample_waypoint;
use waypoint_export::export::{ExportOptions, write_groups};
use waypoint_export::input::read_csv;

/// Group city waypoints from a CSV table by state and write one JSON file per state
///
/// The input is a `city,state,latitude,longitude,elevation` table with a
/// header line. Each state ends up in `<output-dir>/<state>.json`.
///
/// Examples:
///   # Export Austrian cities into ./states
///   waypoint-export -i AustrianDistrictsCities.csv -o states
///
///   # Compact JSON, settings from a config file
///   waypoint-export --config export.toml --compact
///
///   # Print the sample waypoint document
///   waypoint-export --sample
#[derive(Parser, Debug)]
#[command(name = "waypoint-export")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches waypoint-export.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input CSV file
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Existing directory the state files are written to
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Write JSON without indentation
    #[arg(long)]
    compact: bool,

    /// Print the sample waypoint as JSON and exit
    #[arg(long)]
    sample: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.sample {
        let json = serde_json::to_string_pretty(&sample_waypoint())
            .context("Failed to serialize sample waypoint")?;
        println!("{}", json);
        return Ok(());
    }

    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            Some(FileConfig::from_path(config_path)?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let input = args
        .input
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.input.clone()));
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output_dir.clone()));
    let pretty = !args.compact && file_config.as_ref().map(|c| c.pretty).unwrap_or(true);
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    let Some(input) = input else {
        bail!("Must provide an input file with --input/-i or `input` in the config file");
    };
    let Some(output_dir) = output_dir else {
        bail!("Must provide an output directory with --output-dir/-o or `output_dir` in the config file");
    };

    if verbose {
        println!("Configuration:");
        println!("  Input: {}", input.display());
        println!("  Output directory: {}", output_dir.display());
        println!("  Pretty print: {}", pretty);
        println!();
    }

    let spinner = create_spinner("Reading waypoints...");
    let start = Instant::now();
    let groups = read_csv(&input)
        .with_context(|| format!("Failed to read waypoints from {}", input.display()))?;
    let city_count: usize = groups.values().map(Vec::len).sum();
    spinner.finish_with_message(format!(
        "Read {} cities in {} states [{:.1}s]",
        city_count,
        groups.len(),
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Writing state files...");
    let start = Instant::now();
    let options = ExportOptions::default().with_pretty(pretty);
    let summary = write_groups(&groups, &output_dir, &options)
        .with_context(|| format!("Failed to write state files to {}", output_dir.display()))?;
    spinner.finish_with_message(format!(
        "Wrote {} state files [{:.1}s]",
        summary.states.len(),
        start.elapsed().as_secs_f32()
    ));

    if verbose {
        for written in &summary.states {
            println!(
                "  {}: {} cities -> {}",
                written.state,
                written.cities,
                written.path.display()
            );
        }
    }

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!("Output: {}", output_dir.display());

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
