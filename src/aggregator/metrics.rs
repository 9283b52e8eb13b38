//! Dataset-wide performance metrics.
//!
//! Headline KPIs (total sales, total profit, overall margin) and the
//! discount/profit correlation used by the discount impact section.

use crate::dataset::{Dataset, Metric};
use crate::utils::error::{StatsError, SummarizeError};
use log::debug;
use serde::Serialize;
use std::fmt;

/// Headline figures for the whole dataset
///
/// **Public** - returned from kpi_summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub total_sales: f64,
    pub total_profit: f64,

    /// Profit as a percentage of sales, `None` when sales sum to zero
    pub profit_margin_pct: Option<f64>,

    /// Number of transaction rows
    pub transactions: usize,
}

/// Calculate headline KPIs
///
/// **Public** - first analysis section of the report
///
/// # Errors
/// * `SummarizeError::EmptyDataset` - nothing to summarize
pub fn kpi_summary(dataset: &Dataset) -> Result<Kpis, SummarizeError> {
    if dataset.is_empty() {
        return Err(SummarizeError::EmptyDataset);
    }

    let total_sales: f64 = dataset.iter().map(|r| r.sales).sum();
    let total_profit: f64 = dataset.iter().map(|r| r.profit).sum();
    let profit_margin_pct = if total_sales != 0.0 {
        Some(total_profit / total_sales * 100.0)
    } else {
        None
    };

    debug!(
        "KPIs: sales {:.2}, profit {:.2}, {} transactions",
        total_sales,
        total_profit,
        dataset.len()
    );

    Ok(Kpis {
        total_sales,
        total_profit,
        profit_margin_pct,
        transactions: dataset.len(),
    })
}

/// Pearson correlation coefficient of two equally long series
///
/// Returns 0.0 when either series has no variance.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch(x.len(), y.len()));
    }
    if x.len() < 2 {
        return Err(StatsError::NotEnoughObservations(x.len()));
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denominator = (sum_xx * sum_yy).sqrt();
    if denominator < 1e-12 {
        Ok(0.0)
    } else {
        Ok(sum_xy / denominator)
    }
}

/// Symmetric correlation matrix over named metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }
}

impl fmt::Display for CorrelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.labels.iter().map(String::len).max().unwrap_or(0).max(9);

        write!(f, "{:width$}", "", width = width)?;
        for label in &self.labels {
            write!(f, "  {:>width$}", label, width = width)?;
        }
        writeln!(f)?;

        for (label, row) in self.labels.iter().zip(&self.values) {
            write!(f, "{:<width$}", label, width = width)?;
            for value in row {
                write!(f, "  {:>width$.6}", value, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Pairwise Pearson correlations of `metrics` over the dataset
pub fn correlation_matrix(
    dataset: &Dataset,
    metrics: &[Metric],
) -> Result<CorrelationMatrix, StatsError> {
    if dataset.len() < 2 {
        return Err(StatsError::NotEnoughObservations(dataset.len()));
    }

    let columns: Vec<Vec<f64>> = metrics.iter().map(|m| dataset.column(*m)).collect();
    let n = metrics.len();

    let mut values = vec![vec![1.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let r = pearson_correlation(&columns[i], &columns[j])?;
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        labels: metrics.iter().map(|m| m.to_string()).collect(),
        values,
    })
}

/// Discount vs profit correlation matrix
///
/// **Public** - used by the discount impact section
pub fn discount_profit_correlation(dataset: &Dataset) -> Result<CorrelationMatrix, StatsError> {
    correlation_matrix(dataset, &[Metric::Discount, Metric::Profit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;

    fn record(sales: f64, profit: f64, discount: f64) -> Record {
        Record {
            sales,
            profit,
            discount,
            ..Default::default()
        }
    }

    #[test]
    fn test_kpi_summary() {
        let dataset = Dataset::new(vec![record(200.0, 30.0, 0.0), record(50.0, -5.0, 0.2)]);
        let kpis = kpi_summary(&dataset).unwrap();

        assert_eq!(kpis.total_sales, 250.0);
        assert_eq!(kpis.total_profit, 25.0);
        assert!((kpis.profit_margin_pct.unwrap() - 10.0).abs() < 1e-9);
        assert_eq!(kpis.transactions, 2);
    }

    #[test]
    fn test_kpi_summary_zero_sales() {
        let dataset = Dataset::new(vec![record(0.0, 0.0, 0.0)]);
        assert_eq!(kpi_summary(&dataset).unwrap().profit_margin_pct, None);
    }

    #[test]
    fn test_kpi_summary_empty() {
        assert_eq!(
            kpi_summary(&Dataset::default()),
            Err(SummarizeError::EmptyDataset)
        );
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let r = pearson_correlation(&[0.0, 0.1, 0.2, 0.3], &[40.0, 30.0, 20.0, 10.0]).unwrap();
        assert!((r + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_errors() {
        assert_eq!(
            pearson_correlation(&[1.0, 2.0], &[1.0]),
            Err(StatsError::LengthMismatch(2, 1))
        );
        assert_eq!(
            pearson_correlation(&[1.0], &[1.0]),
            Err(StatsError::NotEnoughObservations(1))
        );
    }

    #[test]
    fn test_pearson_no_variance_is_zero() {
        assert_eq!(pearson_correlation(&[0.2, 0.2, 0.2], &[1.0, 5.0, 9.0]), Ok(0.0));
    }

    #[test]
    fn test_discount_profit_matrix_is_symmetric() {
        let dataset = Dataset::new(vec![
            record(100.0, 30.0, 0.0),
            record(100.0, 10.0, 0.2),
            record(100.0, -20.0, 0.5),
        ]);

        let matrix = discount_profit_correlation(&dataset).unwrap();

        assert_eq!(matrix.labels, vec!["Discount", "Profit"]);
        assert_eq!(matrix.get(0, 0), Some(1.0));
        assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
        assert!(matrix.get(0, 1).unwrap() < -0.9);
    }
}
