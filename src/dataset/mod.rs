//! Transaction dataset: record model and file loading.
//!
//! The dataset is loaded once and never mutated afterwards. Every analysis
//! receives it explicitly.

pub mod loader;
pub mod record;

pub use loader::{decode_latin1, load_dataset, parse_order_date, read_dataset};
pub use record::{Field, KeyValue, Metric, Record, YearMonth};

/// Ordered, read-only collection of transaction records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Values of one metric across all records, in dataset order
    pub fn column(&self, metric: Metric) -> Vec<f64> {
        self.records.iter().map(|r| r.metric_value(metric)).collect()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
