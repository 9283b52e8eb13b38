//! Transaction record and the field/metric vocabulary used to group and sum it.

use crate::utils::error::SummarizeError;
use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One transaction row from the Superstore file
///
/// **Public** - immutable once loaded
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    /// Order date, `None` when the source value could not be parsed
    pub order_date: Option<NaiveDate>,

    pub region: String,
    pub category: String,
    pub sub_category: String,
    pub ship_mode: String,
    pub segment: String,
    pub state: String,
    pub city: String,

    pub sales: f64,
    pub profit: f64,
    pub quantity: i32,

    /// Discount as a fraction (0.2 = 20%)
    pub discount: f64,
}

impl Record {
    /// Calendar year of the order date
    pub fn year(&self) -> Option<i32> {
        self.order_date.map(|d| d.year())
    }

    /// Calendar month of the order date
    pub fn month(&self) -> Option<YearMonth> {
        self.order_date.map(YearMonth::from)
    }

    /// Value of a groupable field, `None` when the record has no value for it
    ///
    /// Only the date-derived fields can be absent.
    pub fn key_value(&self, field: Field) -> Option<KeyValue> {
        let text = |s: &str| Some(KeyValue::Text(s.to_string()));
        match field {
            Field::Region => text(&self.region),
            Field::Category => text(&self.category),
            Field::SubCategory => text(&self.sub_category),
            Field::ShipMode => text(&self.ship_mode),
            Field::Segment => text(&self.segment),
            Field::State => text(&self.state),
            Field::City => text(&self.city),
            Field::Year => self.year().map(KeyValue::Year),
            Field::Month => self.month().map(KeyValue::Month),
        }
    }

    /// Numeric value of a summable metric
    pub fn metric_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Sales => self.sales,
            Metric::Profit => self.profit,
            Metric::Quantity => f64::from(self.quantity),
            Metric::Discount => self.discount,
        }
    }
}

/// Fields a dataset can be grouped by, named as in the source header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Region,
    Category,
    #[serde(rename = "Sub-Category")]
    SubCategory,
    #[serde(rename = "Ship Mode")]
    ShipMode,
    Segment,
    State,
    City,
    Year,
    Month,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Region,
        Field::Category,
        Field::SubCategory,
        Field::ShipMode,
        Field::Segment,
        Field::State,
        Field::City,
        Field::Year,
        Field::Month,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Region => "Region",
            Field::Category => "Category",
            Field::SubCategory => "Sub-Category",
            Field::ShipMode => "Ship Mode",
            Field::Segment => "Segment",
            Field::State => "State",
            Field::City => "City",
            Field::Year => "Year",
            Field::Month => "Month",
        }
    }

    /// True for fields derived from Order Date, which may be absent
    pub fn is_date_derived(self) -> bool {
        matches!(self, Field::Year | Field::Month)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = SummarizeError;

    /// Accepts header names case-insensitively, with `_` or space in place of `-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Field::ALL
            .into_iter()
            .find(|field| normalize_name(field.name()) == wanted)
            .ok_or_else(|| SummarizeError::UnknownField(s.trim().to_string()))
    }
}

/// Numeric fields that can be summed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    Sales,
    Profit,
    Quantity,
    Discount,
}

impl Metric {
    pub const ALL: [Metric; 4] = [Metric::Sales, Metric::Profit, Metric::Quantity, Metric::Discount];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Sales => "Sales",
            Metric::Profit => "Profit",
            Metric::Quantity => "Quantity",
            Metric::Discount => "Discount",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Metric::ALL
            .into_iter()
            .find(|metric| normalize_name(metric.name()) == wanted)
            .ok_or_else(|| SummarizeError::UnknownMetric(s.trim().to_string()))
    }
}

fn normalize_name(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single grouping value
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum KeyValue {
    Text(String),
    Year(i32),
    Month(YearMonth),
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValue::Text(text) => f.write_str(text),
            KeyValue::Year(year) => write!(f, "{}", year),
            KeyValue::Month(month) => write!(f, "{}", month),
        }
    }
}

impl From<&str> for KeyValue {
    fn from(text: &str) -> Self {
        KeyValue::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_str_accepts_header_variants() {
        assert_eq!("Sub-Category".parse::<Field>().unwrap(), Field::SubCategory);
        assert_eq!("sub_category".parse::<Field>().unwrap(), Field::SubCategory);
        assert_eq!("ship mode".parse::<Field>().unwrap(), Field::ShipMode);
        assert_eq!(" REGION ".parse::<Field>().unwrap(), Field::Region);
    }

    #[test]
    fn test_unknown_field_and_metric() {
        assert_eq!(
            "Colour".parse::<Field>(),
            Err(SummarizeError::UnknownField("Colour".to_string()))
        );
        assert_eq!(
            "Margin".parse::<Metric>(),
            Err(SummarizeError::UnknownMetric("Margin".to_string()))
        );
    }

    #[test]
    fn test_date_derived_values() {
        let record = Record {
            order_date: NaiveDate::from_ymd_opt(2016, 11, 8),
            ..Default::default()
        };

        assert_eq!(record.key_value(Field::Year), Some(KeyValue::Year(2016)));
        assert_eq!(
            record.key_value(Field::Month),
            Some(KeyValue::Month(YearMonth::new(2016, 11)))
        );

        let undated = Record::default();
        assert_eq!(undated.key_value(Field::Month), None);
        assert_eq!(undated.key_value(Field::Region), Some(KeyValue::from("")));
    }

    #[test]
    fn test_months_order_chronologically() {
        let mut months = vec![
            YearMonth::new(2017, 1),
            YearMonth::new(2016, 12),
            YearMonth::new(2016, 2),
        ];
        months.sort();
        assert_eq!(months[0].to_string(), "2016-02");
        assert_eq!(months[2].to_string(), "2017-01");
    }

    #[test]
    fn test_quantity_metric_is_numeric() {
        let record = Record {
            quantity: 7,
            ..Default::default()
        };
        assert_eq!(record.metric_value(Metric::Quantity), 7.0);
    }
}
