use pretty_assertions::assert_eq;
use std::path::Path;
use superstore_insights::aggregator::{
    discount_profit_correlation, kpi_summary, summarize, GroupKey, DEFAULT_METRICS,
};
use superstore_insights::dataset::{Dataset, Field, Record};
use superstore_insights::output::{report_to_string, validate_path, write_report, Report};

fn create_test_report() -> Report {
    let dataset = Dataset::new(vec![
        Record {
            region: "West".to_string(),
            category: "Technology".to_string(),
            sub_category: "Phones".to_string(),
            ship_mode: "First Class".to_string(),
            sales: 200.0,
            profit: 50.0,
            discount: 0.0,
            ..Default::default()
        },
        Record {
            region: "East".to_string(),
            category: "Furniture".to_string(),
            sub_category: "Tables".to_string(),
            ship_mode: "Standard Class".to_string(),
            sales: 100.0,
            profit: -25.0,
            discount: 0.4,
            ..Default::default()
        },
    ]);
    let by = |key: GroupKey| summarize(dataset.records(), &key, &DEFAULT_METRICS).unwrap();

    Report {
        version: "1.0.0".to_string(),
        source: "test.csv".to_string(),
        generated_at: "2024-01-01T00:00:00+00:00".to_string(),
        kpis: kpi_summary(&dataset).unwrap(),
        regions: by(Field::Region.into()),
        categories: by(GroupKey::Composite(vec![Field::Category, Field::SubCategory])),
        loss_drivers: by(Field::Region.into()).head(0),
        discount_profit_correlation: discount_profit_correlation(&dataset).unwrap(),
        ship_modes: by(Field::ShipMode.into()),
        monthly: by(Field::Region.into()),
    }
}

#[test]
fn test_report_json_shape() {
    let json: serde_json::Value =
        serde_json::from_str(&report_to_string(&create_test_report()).unwrap()).unwrap();

    assert_eq!(json["kpis"]["total_sales"], 300.0);
    assert_eq!(json["regions"]["metrics"], serde_json::json!(["Sales", "Profit"]));
    assert_eq!(
        json["categories"]["group_key"],
        serde_json::json!(["Category", "Sub-Category"])
    );
    assert_eq!(json["regions"]["rows"][0]["key"], serde_json::json!(["West"]));
    assert_eq!(json["regions"]["rows"][0]["profit_margin"], 0.25);
    assert_eq!(json["loss_drivers"]["rows"], serde_json::json!([]));
    assert_eq!(
        json["discount_profit_correlation"]["labels"],
        serde_json::json!(["Discount", "Profit"])
    );
}

#[test]
fn test_undefined_margin_serializes_as_null() {
    let records = vec![Record {
        region: "North".to_string(),
        ..Default::default()
    }];
    let table = summarize(&records, &Field::Region.into(), &DEFAULT_METRICS).unwrap();

    let json = serde_json::to_value(&table).unwrap();

    assert_eq!(json["rows"][0]["profit_margin"], serde_json::Value::Null);
}

#[test]
fn test_write_report_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/report.json");

    write_report(&create_test_report(), &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
}
