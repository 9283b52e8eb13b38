//! Superstore Insights
//!
//! Sales, profit and profit-margin summaries of the Superstore retail
//! transaction dataset, grouped by region, category, shipping mode and
//! month, with static SVG charts.
//!
//! The core is [`aggregator::summarize`]: partition records by a group key,
//! sum the requested metrics, derive the margin and sort by the first metric.
//!
//! ## Getting Started
//!
//! ```bash
//! superstore report --data ./data/Superstore.csv --out charts
//! superstore summarize --by Category,Sub-Category
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod dataset;
pub mod output;
pub mod utils;
