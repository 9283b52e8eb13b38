//! Configuration and constants for the CLI.

/// Default location of the Superstore transaction file
pub const DEFAULT_DATA_PATH: &str = "./data/Superstore.csv";

/// Default directory for rendered charts
pub const DEFAULT_CHART_DIR: &str = "charts";

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default chart size in pixels
pub const DEFAULT_CHART_WIDTH: usize = 960;
pub const DEFAULT_CHART_HEIGHT: usize = 540;

/// Rows shown for the loss-driver table
pub const LOSS_DRIVER_ROWS: usize = 5;

// Columns every data file must carry
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Order Date",
    "Sales",
    "Profit",
    "Quantity",
    "Discount",
    "Region",
    "Category",
    "Sub-Category",
    "Ship Mode",
];

// Order Date layouts tried in order; US month-first is what the dataset ships with
pub const ORDER_DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%m-%d-%Y", "%d-%m-%Y"];

/// Accepted chart dimension range in pixels
pub const MIN_CHART_SIZE: usize = 200;
pub const MAX_CHART_SIZE: usize = 10_000;
