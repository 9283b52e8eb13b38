//! JSON report schema.
//!
//! Versioned so downstream consumers can detect layout changes.

use crate::aggregator::{CorrelationMatrix, Kpis, SummaryTable};
use serde::Serialize;

/// Every analysis section of one report run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Data file the report was computed from
    pub source: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    pub kpis: Kpis,
    pub regions: SummaryTable,
    pub categories: SummaryTable,
    pub loss_drivers: SummaryTable,
    pub discount_profit_correlation: CorrelationMatrix,
    pub ship_modes: SummaryTable,
    pub monthly: SummaryTable,
}
