use chrono::NaiveDate;
use std::io::Write;
use superstore_insights::dataset::{load_dataset, read_dataset, Field, KeyValue, YearMonth};
use superstore_insights::utils::error::LoadError;
use tempfile::NamedTempFile;

const HEADER: &str = "Row ID,Order Date,Ship Mode,Segment,City,State,Region,Category,Sub-Category,Sales,Quantity,Discount,Profit";

fn sample_csv() -> String {
    [
        HEADER,
        "1,11/8/2016,Second Class,Consumer,Henderson,Kentucky,South,Furniture,Bookcases,261.96,2,0,41.9136",
        "2,6/12/2016,Standard Class,Corporate,Los Angeles,California,West,Office Supplies,Labels,14.62,2,0,6.8714",
        "3,not-a-date,Standard Class,Consumer,Fort Lauderdale,Florida,South,Furniture,Tables,957.5775,5,0.45,-383.031",
    ]
    .join("\n")
}

#[test]
fn test_read_dataset_parses_rows() {
    let dataset = read_dataset(sample_csv().as_bytes()).unwrap();

    assert_eq!(dataset.len(), 3);

    let first = &dataset.records()[0];
    assert_eq!(first.order_date, NaiveDate::from_ymd_opt(2016, 11, 8));
    assert_eq!(first.ship_mode, "Second Class");
    assert_eq!(first.region, "South");
    assert_eq!(first.sub_category, "Bookcases");
    assert_eq!(first.city, "Henderson");
    assert_eq!(first.sales, 261.96);
    assert_eq!(first.quantity, 2);
    assert_eq!(first.profit, 41.9136);
    assert_eq!(
        first.key_value(Field::Month),
        Some(KeyValue::Month(YearMonth::new(2016, 11)))
    );
}

#[test]
fn test_malformed_date_becomes_none() {
    let dataset = read_dataset(sample_csv().as_bytes()).unwrap();
    let third = &dataset.records()[2];

    assert_eq!(third.order_date, None);
    assert_eq!(third.year(), None);
    assert_eq!(third.discount, 0.45);
}

#[test]
fn test_latin1_bytes_are_accepted() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(HEADER.as_bytes());
    bytes.extend_from_slice(b"\n1,1/3/2017,First Class,Consumer,");
    // "Montr\xe9al" in Latin-1, invalid as UTF-8
    bytes.extend_from_slice(b"Montr\xe9al");
    bytes.extend_from_slice(b",Quebec,East,Technology,Phones,100,1,0,10\n");

    let dataset = read_dataset(bytes.as_slice()).unwrap();

    assert_eq!(dataset.records()[0].city, "Montréal");
}

#[test]
fn test_invalid_number_reports_line_and_column() {
    let csv = format!(
        "{}\n1,11/8/2016,Second Class,Consumer,Henderson,Kentucky,South,Furniture,Bookcases,abc,2,0,41.9\n",
        HEADER
    );

    match read_dataset(csv.as_bytes()) {
        Err(LoadError::InvalidNumber { row, column, value }) => {
            assert_eq!(row, 2);
            assert_eq!(column, "Sales");
            assert_eq!(value, "abc");
        }
        other => panic!("expected InvalidNumber, got {:?}", other.map(|d| d.len())),
    }
}

#[test]
fn test_optional_columns_may_be_absent() {
    let csv = "Order Date,Sales,Profit,Quantity,Discount,Region,Category,Sub-Category,Ship Mode\n\
               2016-01-05,10,1,1,0,West,Technology,Phones,Same Day\n";

    let dataset = read_dataset(csv.as_bytes()).unwrap();

    assert_eq!(dataset.records()[0].segment, "");
    assert_eq!(dataset.records()[0].ship_mode, "Same Day");
}

#[test]
fn test_empty_input_has_no_headers() {
    assert!(matches!(
        read_dataset(&b""[..]),
        Err(LoadError::MissingHeaders)
    ));
}

#[test]
fn test_load_dataset_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(sample_csv().as_bytes()).unwrap();
    file.flush().unwrap();

    let dataset = load_dataset(file.path()).unwrap();
    assert_eq!(dataset.len(), 3);
}

#[test]
fn test_load_dataset_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = load_dataset(temp_dir.path().join("missing.csv"));
    assert!(matches!(result, Err(LoadError::Io(_))));
}
