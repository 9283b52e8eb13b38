//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the library components to perform user tasks.

pub mod models;
pub mod report;
pub mod summarize;
pub mod utils;

// Re-export main command functions
pub use models::{ReportArgs, SummarizeArgs};
pub use report::{execute_report, run_report, validate_args};
pub use summarize::{execute_summarize, summarize_dataset};
pub use utils::{display_fields, display_version};
