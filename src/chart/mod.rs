//! Chart rendering for summary tables.
//!
//! This module turns summary tables and raw point sets into static SVG charts.

pub mod generator;

// Re-export main types
pub use generator::{
    escape_xml, format_tick, render_scatter, render_table_chart, ChartConfig, ChartKind,
    ChartSpec, Series,
};
