use crate::chart::ChartConfig;
use crate::utils::config::{DEFAULT_CHART_DIR, DEFAULT_DATA_PATH};
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Superstore data file
    pub data_path: PathBuf,

    /// Directory for SVG charts (None = no charts)
    pub chart_dir: Option<PathBuf>,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Chart canvas size
    pub chart_config: ChartConfig,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            chart_dir: Some(PathBuf::from(DEFAULT_CHART_DIR)),
            output_json: None,
            chart_config: ChartConfig::default(),
        }
    }
}

/// Arguments for the ad-hoc summarize command
#[derive(Debug, Clone)]
pub struct SummarizeArgs {
    pub data_path: PathBuf,

    /// Comma-separated group fields ("Category,Sub-Category")
    pub group_by: String,

    /// Metric names; first is the sort metric and margin denominator
    pub metrics: Vec<String>,

    /// Skip records without a value for a key field
    pub dropna: bool,

    /// Fail instead of reporting n/a when a margin denominator is zero
    pub strict_margin: bool,

    /// Print the table as JSON instead of text
    pub json: bool,
}

impl Default for SummarizeArgs {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            group_by: "Region".to_string(),
            metrics: vec!["Sales".to_string(), "Profit".to_string()],
            dropna: false,
            strict_margin: false,
            json: false,
        }
    }
}
