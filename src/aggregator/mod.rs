//! Aggregation of transaction records into summaries and metrics.
//!
//! This module transforms a loaded dataset into:
//! - Grouped summary tables (sales, profit, margin per dimension)
//! - Headline KPIs
//! - Correlation statistics

pub mod metrics;
pub mod summarizer;

// Re-export main types and functions
pub use metrics::{
    correlation_matrix, discount_profit_correlation, kpi_summary, pearson_correlation,
    CorrelationMatrix, Kpis,
};
pub use summarizer::{
    summarize, summarize_with_options, GroupKey, SortOrder, SummarizeOptions, SummaryRow,
    SummaryTable, ZeroDenominator, DEFAULT_METRICS,
};
