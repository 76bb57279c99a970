//! CLI entry point for the OSM route statistics tool.
//!
//! Provides subcommands for extracting a map extract's tag vocabulary and
//! for aggregating route quality samples into plot-ready tables.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use osm_route_stats::analysis::bearing::{
    DEFAULT_BIN_WIDTH_DEGREES, bearing_profile, validate_bin_width,
};
use osm_route_stats::analysis::distribution::{
    DEFAULT_LOWER, DEFAULT_UPPER_PERCENTILE, trimmed_ratio_distribution,
};
use osm_route_stats::analysis::loader::load_samples;
use osm_route_stats::analysis::summary::summarize;
use osm_route_stats::analysis::types::ProfileReport;
use osm_route_stats::extract::extract;
use osm_route_stats::output::{print_summary, write_profile, write_ratios_csv, write_vocabulary};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "osm_route_stats")]
#[command(about = "A tool to analyze OSM extracts and route quality samples", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the tag vocabulary from an OSM XML extract
    Tags {
        /// Path to the .osm extract
        #[arg(value_name = "EXTRACT")]
        source: PathBuf,

        /// JSON file to write the vocabulary to
        #[arg(short, long, default_value = "results/tag_analysis.json")]
        output: PathBuf,
    },
    /// Aggregate route quality samples into plot-ready tables
    Routes {
        /// CSV file with bearing and path_ratio columns
        #[arg(value_name = "SAMPLES")]
        source: PathBuf,

        /// Directory to write the derived tables to
        #[arg(short = 'd', long, default_value = "results/analysis")]
        output_dir: PathBuf,

        /// Angular bin width in degrees; must divide 360 evenly
        #[arg(short, long, default_value_t = DEFAULT_BIN_WIDTH_DEGREES)]
        bin_width: u32,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/osm_route_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("osm_route_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tags { source, output } => {
            let extraction = extract(&source)?;

            if extraction.dense_tag_lines > 0 {
                warn!(
                    dense_tag_lines = extraction.dense_tag_lines,
                    "input contained lines with multiple tags"
                );
            }
            info!(
                keys = extraction.vocabulary.len(),
                lines = extraction.lines_scanned,
                "tag vocabulary extracted"
            );

            write_vocabulary(&output, &extraction.vocabulary)?;
            info!(output = %output.display(), "vocabulary written");
        }
        Commands::Routes {
            source,
            output_dir,
            bin_width,
        } => {
            // Reject a bad bin width before any data is read
            validate_bin_width(bin_width)?;

            let samples = load_samples(&source)?;
            let summary = summarize(&samples)?;
            print_summary(&summary)?;

            let profile = bearing_profile(&samples, bin_width)?;
            write_profile(
                &output_dir.join("bearing_profile.json"),
                &ProfileReport::from_profile(&profile),
            )?;

            let ratios =
                trimmed_ratio_distribution(&samples, DEFAULT_LOWER, DEFAULT_UPPER_PERCENTILE)?;
            write_ratios_csv(&output_dir.join("trimmed_ratios.csv"), &ratios)?;

            info!(
                bins = profile.bins.len(),
                ratios = ratios.len(),
                output_dir = %output_dir.display(),
                "route analysis written"
            );
        }
    }

    Ok(())
}
