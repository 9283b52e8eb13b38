//! Output writers and the rendering sink.
//!
//! This module handles everything downstream of the summarizer:
//! - SVG chart files
//! - JSON report export
//! - Console tables and KPI lines
//! - The `RenderSink` seam analysis sections hand their results to

pub mod json;
pub mod schema;
pub mod sink;
pub mod svg;
pub mod table;

// Re-export main functions
pub use json::{report_to_string, write_report};
pub use schema::Report;
pub use sink::{FileSink, RenderSink};
pub use svg::write_svg;
pub use table::{format_currency, format_kpis, format_margin, format_table};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create missing parent directories of an output file
fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            log::debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
