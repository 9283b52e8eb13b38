//! Group-by / sum / derive / sort over transaction records.
//!
//! Every analysis section is one call to [`summarize`]: partition the records by a
//! group key, sum each requested metric per partition, derive the profit margin
//! as `metrics[1] / metrics[0]`, and order by the first metric, largest first.

use crate::dataset::{Field, KeyValue, Metric, Record};
use crate::utils::error::SummarizeError;
use log::{debug, warn};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Metrics used when none are given
pub const DEFAULT_METRICS: [Metric; 2] = [Metric::Sales, Metric::Profit];

/// Fields used to partition records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GroupKey {
    Single(Field),
    Composite(Vec<Field>),
}

impl GroupKey {
    pub fn fields(&self) -> &[Field] {
        match self {
            GroupKey::Single(field) => std::slice::from_ref(field),
            GroupKey::Composite(fields) => fields,
        }
    }

    /// Parse a comma-separated list of field names ("Category,Sub-Category")
    pub fn parse(spec: &str) -> Result<Self, SummarizeError> {
        let fields = spec
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse::<Field>)
            .collect::<Result<Vec<_>, _>>()?;

        let key = if fields.len() == 1 {
            GroupKey::Single(fields[0])
        } else {
            GroupKey::Composite(fields)
        };
        key.validate()?;
        Ok(key)
    }

    /// Reject composite keys that are empty or repeat a field
    pub fn validate(&self) -> Result<(), SummarizeError> {
        let fields = self.fields();
        if fields.is_empty() {
            return Err(SummarizeError::MalformedGroupKey(
                "no fields given".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for field in fields {
            if !seen.insert(field) {
                return Err(SummarizeError::MalformedGroupKey(format!(
                    "field '{}' appears more than once",
                    field
                )));
            }
        }
        Ok(())
    }
}

impl From<Field> for GroupKey {
    fn from(field: Field) -> Self {
        GroupKey::Single(field)
    }
}

impl From<Vec<Field>> for GroupKey {
    fn from(fields: Vec<Field>) -> Self {
        GroupKey::Composite(fields)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields().iter().map(|field| field.name()).collect();
        f.write_str(&names.join(" + "))
    }
}

/// What to do when a partition's primary metric sums to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroDenominator {
    /// Profit margin is `None`
    #[default]
    Undefined,
    /// Fail with `SummarizeError::ArithmeticAmbiguity`
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummarizeOptions {
    /// Skip records without a value for a key field instead of failing
    pub dropna: bool,
    pub zero_denominator: ZeroDenominator,
}

impl SummarizeOptions {
    pub fn with_dropna(mut self, dropna: bool) -> Self {
        self.dropna = dropna;
        self
    }

    pub fn with_zero_denominator(mut self, policy: ZeroDenominator) -> Self {
        self.zero_denominator = policy;
        self
    }
}

/// Aggregated output row for one distinct grouping value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// One value per group key field
    pub key: Vec<KeyValue>,

    /// Summed metrics, aligned with the table's metric list
    pub metrics: Vec<f64>,

    /// `metrics[1] / metrics[0]`, `None` when `metrics[0]` is zero
    pub profit_margin: Option<f64>,
}

impl SummaryRow {
    /// Key values joined for display ("Furniture / Tables")
    pub fn key_label(&self) -> String {
        self.key
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Ordered summary rows plus the key and metrics that produced them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    group_key: GroupKey,
    metrics: Vec<Metric>,
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Table with no rows, for sections whose input had nothing to group
    pub fn empty(group_key: GroupKey, metrics: &[Metric]) -> Self {
        Self {
            group_key,
            metrics: metrics.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn group_key(&self) -> &GroupKey {
        &self.group_key
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn metric_index(&self, metric: Metric) -> Option<usize> {
        self.metrics.iter().position(|m| *m == metric)
    }

    /// Summed value of `metric` for every row, in table order
    pub fn metric_values(&self, metric: Metric) -> Option<Vec<f64>> {
        let idx = self.metric_index(metric)?;
        Some(self.rows.iter().map(|row| row.metrics[idx]).collect())
    }

    /// Sum of `metric` across all rows
    pub fn total(&self, metric: Metric) -> Option<f64> {
        self.metric_values(metric).map(|values| values.iter().sum())
    }

    /// Keep rows whose value of `metric` satisfies `pred`
    pub fn filter_by(
        mut self,
        metric: Metric,
        pred: impl Fn(f64) -> bool,
    ) -> Result<Self, SummarizeError> {
        let idx = self.require_metric(metric)?;
        self.rows.retain(|row| pred(row.metrics[idx]));
        Ok(self)
    }

    /// Stable re-sort by one metric
    pub fn sort_by_metric(
        mut self,
        metric: Metric,
        order: SortOrder,
    ) -> Result<Self, SummarizeError> {
        let idx = self.require_metric(metric)?;
        self.rows.sort_by(|a, b| {
            let ord = a.metrics[idx].total_cmp(&b.metrics[idx]);
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
        Ok(self)
    }

    /// Re-sort by key values; months and years order chronologically
    pub fn sort_by_key(mut self) -> Self {
        self.rows.sort_by(|a, b| a.key.cmp(&b.key));
        self
    }

    pub fn head(mut self, n: usize) -> Self {
        self.rows.truncate(n);
        self
    }

    fn require_metric(&self, metric: Metric) -> Result<usize, SummarizeError> {
        self.metric_index(metric)
            .ok_or_else(|| SummarizeError::UnknownMetric(metric.to_string()))
    }
}

/// Summarize records with default options
///
/// **Public** - main entry point for every analysis dimension
///
/// # Arguments
/// * `records` - Non-empty set of records
/// * `group_key` - Field(s) to partition by
/// * `metrics` - Metrics to sum; `metrics[0]` orders the result and is the
///   margin denominator, `metrics[1]` the numerator
///
/// # Errors
/// * `SummarizeError::EmptyDataset` - no records
/// * `SummarizeError::MissingField` - a record has no value for a key field
/// * `SummarizeError::NotEnoughMetrics` - fewer than 2 metrics
/// * `SummarizeError::MalformedGroupKey` - empty or repeating key
pub fn summarize(
    records: &[Record],
    group_key: &GroupKey,
    metrics: &[Metric],
) -> Result<SummaryTable, SummarizeError> {
    summarize_with_options(records, group_key, metrics, SummarizeOptions::default())
}

/// Summarize records with explicit missing-key and zero-denominator handling
pub fn summarize_with_options(
    records: &[Record],
    group_key: &GroupKey,
    metrics: &[Metric],
    options: SummarizeOptions,
) -> Result<SummaryTable, SummarizeError> {
    if metrics.len() < 2 {
        return Err(SummarizeError::NotEnoughMetrics(metrics.len()));
    }
    group_key.validate()?;
    if records.is_empty() {
        return Err(SummarizeError::EmptyDataset);
    }

    debug!(
        "Summarizing {} records by {} over [{}]",
        records.len(),
        group_key,
        metrics.iter().map(|m| m.name()).collect::<Vec<_>>().join(", ")
    );

    let fields = group_key.fields();

    // Partitions in first-seen order; the map only points into `partitions`
    let mut slots: HashMap<Vec<KeyValue>, usize> = HashMap::new();
    let mut partitions: Vec<(Vec<KeyValue>, Vec<f64>)> = Vec::new();
    let mut skipped = 0usize;

    'records: for (index, record) in records.iter().enumerate() {
        let mut key = Vec::with_capacity(fields.len());
        for &field in fields {
            match record.key_value(field) {
                Some(value) => key.push(value),
                None if options.dropna => {
                    skipped += 1;
                    continue 'records;
                }
                None => {
                    return Err(SummarizeError::MissingField {
                        field: field.to_string(),
                        index,
                    })
                }
            }
        }

        let slot = *slots.entry(key).or_insert_with_key(|key| {
            partitions.push((key.clone(), vec![0.0; metrics.len()]));
            partitions.len() - 1
        });

        let sums = &mut partitions[slot].1;
        for (sum, metric) in sums.iter_mut().zip(metrics) {
            *sum += record.metric_value(*metric);
        }
    }

    if skipped > 0 {
        warn!("Skipped {} records with no value for {}", skipped, group_key);
    }
    if partitions.is_empty() {
        return Err(SummarizeError::EmptyDataset);
    }

    let mut rows = partitions
        .into_iter()
        .map(|(key, sums)| {
            let profit_margin = derive_margin(&key, &sums, options.zero_denominator)?;
            Ok(SummaryRow {
                key,
                metrics: sums,
                profit_margin,
            })
        })
        .collect::<Result<Vec<_>, SummarizeError>>()?;

    // Stable: equal totals keep first-seen order
    rows.sort_by(|a, b| b.metrics[0].total_cmp(&a.metrics[0]));

    debug!("Produced {} summary rows", rows.len());

    Ok(SummaryTable {
        group_key: group_key.clone(),
        metrics: metrics.to_vec(),
        rows,
    })
}

/// Derive `sums[1] / sums[0]` under the zero-denominator policy
///
/// **Private** - internal helper for summarize_with_options
fn derive_margin(
    key: &[KeyValue],
    sums: &[f64],
    policy: ZeroDenominator,
) -> Result<Option<f64>, SummarizeError> {
    let (denominator, numerator) = (sums[0], sums[1]);
    if denominator != 0.0 {
        return Ok(Some(numerator / denominator));
    }

    match policy {
        ZeroDenominator::Undefined => Ok(None),
        ZeroDenominator::Error => Err(SummarizeError::ArithmeticAmbiguity {
            key: key
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" / "),
        }),
    }
}
