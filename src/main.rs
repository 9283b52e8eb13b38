//! Superstore Insights CLI
//!
//! Summarizes the Superstore transaction dataset by region, category,
//! shipping mode and month, and renders SVG charts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use superstore_insights::chart::ChartConfig;
use superstore_insights::commands::{
    display_fields, display_version, execute_report, execute_summarize, validate_args,
    ReportArgs, SummarizeArgs,
};
use superstore_insights::utils::config::{
    DEFAULT_CHART_DIR, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_DATA_PATH,
};

/// Superstore Insights - sales and profit summaries
#[derive(Parser, Debug)]
#[command(name = "superstore")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run every analysis section and render charts
    Report {
        /// Superstore data file
        #[arg(short, long, env = "SUPERSTORE_DATA", default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Directory for SVG charts
        #[arg(short, long, default_value = DEFAULT_CHART_DIR)]
        out: PathBuf,

        /// Skip chart rendering
        #[arg(long)]
        no_charts: bool,

        /// Output path for the JSON report (optional)
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Chart width in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
        width: usize,

        /// Chart height in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
        height: usize,
    },

    /// Print one summary table
    Summarize {
        /// Superstore data file
        #[arg(short, long, env = "SUPERSTORE_DATA", default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Group fields, comma-separated (e.g. "Category,Sub-Category")
        #[arg(short, long, default_value = "Region")]
        by: String,

        /// Metrics to sum; the first orders the table, margin = second / first
        #[arg(short, long, value_delimiter = ',', default_value = "Sales,Profit")]
        metrics: Vec<String>,

        /// Skip records without a value for a group field
        #[arg(long)]
        dropna: bool,

        /// Fail when a group's first metric sums to zero
        #[arg(long)]
        strict_margin: bool,

        /// Print JSON instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// List groupable fields and metrics
    Fields,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            data,
            out,
            no_charts,
            json,
            width,
            height,
        } => {
            let args = ReportArgs {
                data_path: data,
                chart_dir: if no_charts { None } else { Some(out) },
                output_json: json,
                chart_config: ChartConfig::new().with_width(width).with_height(height),
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Summarize {
            data,
            by,
            metrics,
            dropna,
            strict_margin,
            json,
        } => {
            execute_summarize(SummarizeArgs {
                data_path: data,
                group_by: by,
                metrics,
                dropna,
                strict_margin,
                json,
            })?;
        }

        Commands::Fields => {
            display_fields();
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
