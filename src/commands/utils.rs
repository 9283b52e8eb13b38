use crate::dataset::{Field, Metric};
use crate::utils::config::{REQUIRED_COLUMNS, SCHEMA_VERSION};

/// Display groupable fields and summable metrics
pub fn display_fields() {
    println!("Group fields:");
    for field in Field::ALL {
        let note = if field.is_date_derived() {
            "  (derived from Order Date, may be empty)"
        } else {
            ""
        };
        println!("  {}{}", field, note);
    }
    println!();
    println!("Metrics:");
    for metric in Metric::ALL {
        println!("  {}", metric);
    }
    println!();
    println!("Required columns: {}", REQUIRED_COLUMNS.join(", "));
}

/// Display version information
pub fn display_version() {
    println!("Superstore Insights v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Sales, profit and margin summaries for the Superstore retail dataset.");
}
