//! Superstore file loader.
//!
//! The dataset ships in a legacy single-byte encoding, so fields are read as raw
//! bytes and decoded as Latin-1 rather than UTF-8. Malformed order dates become
//! `None`; every other malformed value aborts the load.

use super::record::Record;
use super::Dataset;
use crate::utils::config::{ORDER_DATE_FORMATS, REQUIRED_COLUMNS};
use crate::utils::error::LoadError;
use chrono::NaiveDate;
use csv::{ByteRecord, ReaderBuilder};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

// Files saved by spreadsheet tools sometimes start with a UTF-8 byte order mark
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Column positions resolved from the header row
struct ColumnMap {
    order_date: usize,
    sales: usize,
    profit: usize,
    quantity: usize,
    discount: usize,
    region: usize,
    category: usize,
    sub_category: usize,
    ship_mode: usize,
    segment: Option<usize>,
    state: Option<usize>,
    city: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &[String]) -> Result<Self, LoadError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| find(name).ok_or_else(|| LoadError::MissingColumn(name.to_string()));

        // Fail on the first missing column in declaration order
        for name in REQUIRED_COLUMNS.iter().copied() {
            require(name)?;
        }

        Ok(Self {
            order_date: require("Order Date")?,
            sales: require("Sales")?,
            profit: require("Profit")?,
            quantity: require("Quantity")?,
            discount: require("Discount")?,
            region: require("Region")?,
            category: require("Category")?,
            sub_category: require("Sub-Category")?,
            ship_mode: require("Ship Mode")?,
            segment: find("Segment"),
            state: find("State"),
            city: find("City"),
        })
    }
}

/// Load the dataset from a file on disk
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `LoadError::Io` - file cannot be opened
/// * `LoadError::MissingColumn` - a required column is absent
/// * `LoadError::InvalidNumber` - a measure cannot be parsed
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    info!("Loading dataset from: {}", path.display());

    let file = File::open(path)?;
    read_dataset(BufReader::new(file))
}

/// Read the dataset from any byte source
///
/// **Public** - used by `load_dataset` and by tests with in-memory input
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .byte_headers()?
        .iter()
        .map(|h| decode_latin1(h.strip_prefix(UTF8_BOM).unwrap_or(h)).trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::MissingHeaders);
    }

    let columns = ColumnMap::from_headers(&headers)?;

    let mut records = Vec::new();
    let mut invalid_dates = 0usize;
    let mut row = ByteRecord::new();
    let mut index = 0usize;

    while csv_reader.read_byte_record(&mut row)? {
        // Line number in the source file, header is line 1
        let line = row
            .position()
            .map_or(index + 2, |p| p.line() as usize);
        index += 1;

        let record = parse_row(&row, &columns, line)?;
        if record.order_date.is_none() {
            invalid_dates += 1;
        }
        records.push(record);
    }

    if invalid_dates > 0 {
        warn!("{} rows have an unreadable Order Date; date fields left empty", invalid_dates);
    }

    info!("Loaded {} records", records.len());

    Ok(Dataset::new(records))
}

/// Convert one raw row into a Record
///
/// **Private** - internal helper for read_dataset
fn parse_row(row: &ByteRecord, columns: &ColumnMap, line: usize) -> Result<Record, LoadError> {
    let text = |idx: usize| row.get(idx).map(decode_latin1).unwrap_or_default().trim().to_string();
    let optional_text = |idx: Option<usize>| idx.map(text).unwrap_or_default();

    let raw_date = text(columns.order_date);
    let order_date = parse_order_date(&raw_date);
    if order_date.is_none() {
        debug!("Line {}: unreadable Order Date {:?}", line, raw_date);
    }

    Ok(Record {
        order_date,
        region: text(columns.region),
        category: text(columns.category),
        sub_category: text(columns.sub_category),
        ship_mode: text(columns.ship_mode),
        segment: optional_text(columns.segment),
        state: optional_text(columns.state),
        city: optional_text(columns.city),
        sales: parse_measure(&text(columns.sales), "Sales", line)?,
        profit: parse_measure(&text(columns.profit), "Profit", line)?,
        quantity: parse_quantity(&text(columns.quantity), line)?,
        discount: parse_measure(&text(columns.discount), "Discount", line)?,
    })
}

/// Decode a Latin-1 byte field; every byte maps to the code point of the same value
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Parse an order date, returning `None` instead of failing
pub fn parse_order_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    // Some exports carry a time component we do not need
    let date_part = raw.split_whitespace().next().unwrap_or(raw);

    ORDER_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

fn parse_measure(raw: &str, column: &str, line: usize) -> Result<f64, LoadError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LoadError::InvalidNumber {
            row: line,
            column: column.to_string(),
            value: raw.to_string(),
        })
}

// Exports write counts as "2" or "2.0"; returns come through as negative counts
fn parse_quantity(raw: &str, line: usize) -> Result<i32, LoadError> {
    let value = parse_measure(raw, "Quantity", line)?;
    let in_range = (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&value);
    if value.fract() != 0.0 || !in_range {
        return Err(LoadError::InvalidNumber {
            row: line,
            column: "Quantity".to_string(),
            value: raw.to_string(),
        });
    }
    Ok(value as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_latin1_maps_high_bytes() {
        // "Café" in Latin-1
        assert_eq!(decode_latin1(&[0x43, 0x61, 0x66, 0xE9]), "Café");
    }

    #[test]
    fn test_parse_order_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2016, 11, 8);
        assert_eq!(parse_order_date("11/8/2016"), expected);
        assert_eq!(parse_order_date("2016-11-08"), expected);
        assert_eq!(parse_order_date("11/8/2016 00:00"), expected);
    }

    #[test]
    fn test_parse_order_date_dashed_reads_month_first() {
        assert_eq!(parse_order_date("03-04-2016"), NaiveDate::from_ymd_opt(2016, 3, 4));
        // Only a day past 12 falls back to day-first
        assert_eq!(parse_order_date("25-12-2016"), NaiveDate::from_ymd_opt(2016, 12, 25));
    }

    #[test]
    fn test_parse_quantity_accepts_integral_and_returns() {
        assert_eq!(parse_quantity("3", 2).unwrap(), 3);
        assert_eq!(parse_quantity("2.0", 2).unwrap(), 2);
        assert_eq!(parse_quantity("-1", 2).unwrap(), -1);
    }

    #[test]
    fn test_parse_quantity_rejects_fractional() {
        assert!(matches!(
            parse_quantity("2.5", 7),
            Err(LoadError::InvalidNumber { row: 7, .. })
        ));
        assert!(parse_quantity("many", 7).is_err());
    }

    #[test]
    fn test_parse_order_date_malformed_is_none() {
        assert_eq!(parse_order_date(""), None);
        assert_eq!(parse_order_date("not a date"), None);
        assert_eq!(parse_order_date("13/45/2016"), None);
    }

    #[test]
    fn test_parse_measure_rejects_non_finite() {
        assert!(parse_measure("NaN", "Sales", 2).is_err());
        assert!(parse_measure("inf", "Sales", 2).is_err());
        assert_eq!(parse_measure("-3.8", "Profit", 2).unwrap(), -3.8);
    }

    #[test]
    fn test_missing_column_reported() {
        let input = "Order Date,Sales,Profit\n11/8/2016,1,1\n";
        match read_dataset(input.as_bytes()) {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, "Quantity"),
            other => panic!("expected MissingColumn, got {:?}", other.map(|d| d.len())),
        }
    }
}
