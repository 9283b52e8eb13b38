//! Report command implementation.
//!
//! The report command:
//! 1. Loads the dataset
//! 2. Prints headline KPIs
//! 3. Summarizes by region, category, shipping mode and month
//! 4. Finds loss-making sub-categories
//! 5. Measures the discount/profit relationship
//! 6. Writes charts and the optional JSON report

use super::models::ReportArgs;
use crate::aggregator::{
    discount_profit_correlation, kpi_summary, summarize, summarize_with_options, CorrelationMatrix,
    GroupKey, Kpis, SortOrder, SummarizeOptions, SummaryTable, DEFAULT_METRICS,
};
use crate::utils::error::SummarizeError;
use crate::chart::{ChartKind, ChartSpec, Series};
use crate::dataset::{load_dataset, Dataset, Field, Metric};
use crate::output::{format_kpis, write_report, FileSink, RenderSink, Report};
use crate::utils::config::{LOSS_DRIVER_ROWS, MAX_CHART_SIZE, MIN_CHART_SIZE, SCHEMA_VERSION};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Data file missing or malformed
/// * Any summary failing on invalid input
/// * Chart or JSON write errors
pub fn execute_report(args: ReportArgs) -> Result<Report> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading dataset...");
    let dataset = load_dataset(&args.data_path)
        .with_context(|| format!("Failed to load dataset from {}", args.data_path.display()))?;

    info!("Step 2/3: Running analyses...");
    let stdout = std::io::stdout();
    let mut sink = FileSink::new(args.chart_dir.clone(), args.chart_config.clone(), stdout.lock());
    let report = run_report(&dataset, &args.data_path.display().to_string(), &mut sink)?;

    info!("Step 3/3: Writing outputs...");
    for path in sink.written() {
        info!("✓ Chart written to: {}", path.display());
    }

    if let Some(json_path) = &args.output_json {
        write_report(&report, json_path).context("Failed to write JSON report")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    info!(
        "Report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Run every analysis section against an already loaded dataset
///
/// **Public** - the dataset is passed explicitly to each section
pub fn run_report(dataset: &Dataset, source: &str, sink: &mut dyn RenderSink) -> Result<Report> {
    let kpis = kpi_section(dataset, sink)?;
    let regions = region_section(dataset, sink)?;
    let categories = category_section(dataset, sink)?;
    let loss_drivers = loss_driver_section(dataset, sink)?;
    let discount_profit_correlation = discount_section(dataset, sink)?;
    let ship_modes = ship_mode_section(dataset, sink)?;
    let monthly = monthly_section(dataset, sink)?;

    Ok(Report {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        kpis,
        regions,
        categories,
        loss_drivers,
        discount_profit_correlation,
        ship_modes,
        monthly,
    })
}

/// Headline sales, profit and margin
pub fn kpi_section(dataset: &Dataset, sink: &mut dyn RenderSink) -> Result<Kpis> {
    let kpis = kpi_summary(dataset).context("Failed to compute KPIs")?;
    sink.print_text(&format_kpis(&kpis))?;
    Ok(kpis)
}

/// Sales, profit and margin per region; margin chart
pub fn region_section(dataset: &Dataset, sink: &mut dyn RenderSink) -> Result<SummaryTable> {
    let table = summarize(dataset.records(), &Field::Region.into(), &DEFAULT_METRICS)
        .context("Failed to summarize by region")?;

    sink.print_table("Regional Performance", &table)?;
    sink.render_chart(
        &table,
        &ChartSpec::new(ChartKind::Bar, "Profit Margin by Region")
            .with_x("Region")
            .with_series(Series::ProfitMargin),
    )?;

    if let Some(best) = best_margin(&table) {
        debug!("Highest regional margin: {}", best);
    }
    Ok(table)
}

/// Sales per category and sub-category; horizontal sales chart
pub fn category_section(dataset: &Dataset, sink: &mut dyn RenderSink) -> Result<SummaryTable> {
    let table = summarize(dataset.records(), &category_key(), &DEFAULT_METRICS)
        .context("Failed to summarize by category")?
        .sort_by_metric(Metric::Sales, SortOrder::Descending)?;

    sink.print_table("Category & Sub-Category Performance", &table)?;
    sink.render_chart(
        &table,
        &ChartSpec::new(ChartKind::HorizontalBar, "Sales by Sub-Category")
            .with_x("Sub-Category")
            .with_series(Metric::Sales),
    )?;
    Ok(table)
}

/// Loss-making sub-categories, worst first
pub fn loss_driver_section(dataset: &Dataset, sink: &mut dyn RenderSink) -> Result<SummaryTable> {
    let losses = summarize(dataset.records(), &category_key(), &DEFAULT_METRICS)
        .context("Failed to summarize loss drivers")?
        .filter_by(Metric::Profit, |profit| profit < 0.0)?
        .sort_by_metric(Metric::Profit, SortOrder::Ascending)?;

    debug!("{} sub-categories run at a loss", losses.len());

    sink.print_table("Loss Drivers", &losses.clone().head(LOSS_DRIVER_ROWS))?;
    Ok(losses)
}

/// Discount/profit correlation and record-level scatter
pub fn discount_section(dataset: &Dataset, sink: &mut dyn RenderSink) -> Result<CorrelationMatrix> {
    let matrix =
        discount_profit_correlation(dataset).context("Failed to correlate discount and profit")?;

    sink.print_text(&format!("\nDiscount Impact\n{}", matrix))?;

    let points: Vec<(f64, f64)> = dataset.iter().map(|r| (r.discount, r.profit)).collect();
    sink.render_scatter(
        &points,
        &ChartSpec::new(ChartKind::Scatter, "Discount vs Profit Relationship")
            .with_x("Discount")
            .with_series(Metric::Profit),
    )?;
    Ok(matrix)
}

/// Sales, profit and quantity per shipping mode; margin chart
pub fn ship_mode_section(dataset: &Dataset, sink: &mut dyn RenderSink) -> Result<SummaryTable> {
    let table = summarize(
        dataset.records(),
        &Field::ShipMode.into(),
        &[Metric::Sales, Metric::Profit, Metric::Quantity],
    )
    .context("Failed to summarize by shipping mode")?;

    sink.print_table("Shipping Mode Performance", &table)?;
    sink.render_chart(
        &table,
        &ChartSpec::new(ChartKind::Bar, "Profit Margin by Shipping Mode")
            .with_x("Ship Mode")
            .with_series(Series::ProfitMargin),
    )?;
    Ok(table)
}

/// Monthly sales and profit in calendar order; trend chart
///
/// Records with an unreadable order date carry no month and are skipped.
/// When no record has a date the table is empty and the chart is skipped.
pub fn monthly_section(dataset: &Dataset, sink: &mut dyn RenderSink) -> Result<SummaryTable> {
    let table = match summarize_with_options(
        dataset.records(),
        &Field::Month.into(),
        &DEFAULT_METRICS,
        SummarizeOptions::default().with_dropna(true),
    ) {
        Ok(table) => table.sort_by_key(),
        Err(SummarizeError::EmptyDataset) if !dataset.is_empty() => {
            warn!("No record has a readable order date, monthly trend is empty");
            SummaryTable::empty(Field::Month.into(), &DEFAULT_METRICS)
        }
        Err(err) => return Err(err).context("Failed to summarize by month"),
    };

    sink.print_table("Monthly Sales and Profit", &table)?;
    if table.is_empty() {
        return Ok(table);
    }

    sink.render_chart(
        &table,
        &ChartSpec::new(ChartKind::Line, "Monthly Sales and Profit Trend")
            .with_x("Month")
            .with_series(Metric::Sales)
            .with_series(Metric::Profit),
    )?;
    Ok(table)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.data_path.as_os_str().is_empty() {
        anyhow::bail!("Data path cannot be empty");
    }

    let size_range = MIN_CHART_SIZE..=MAX_CHART_SIZE;
    if !size_range.contains(&args.chart_config.width) {
        anyhow::bail!(
            "Chart width must be between {} and {} pixels",
            MIN_CHART_SIZE,
            MAX_CHART_SIZE
        );
    }
    if !size_range.contains(&args.chart_config.height) {
        anyhow::bail!(
            "Chart height must be between {} and {} pixels",
            MIN_CHART_SIZE,
            MAX_CHART_SIZE
        );
    }

    if let (Some(json), Some(dir)) = (&args.output_json, &args.chart_dir) {
        if json == dir {
            anyhow::bail!("JSON report path cannot be the chart directory");
        }
    }

    Ok(())
}

fn category_key() -> GroupKey {
    GroupKey::Composite(vec![Field::Category, Field::SubCategory])
}

fn best_margin(table: &SummaryTable) -> Option<String> {
    table
        .rows()
        .iter()
        .filter_map(|row| row.profit_margin.map(|m| (row, m)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(row, margin)| format!("{} ({:.2}%)", row.key_label(), margin * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::SummaryRow;
    use crate::dataset::{KeyValue, Record};

    use crate::chart::ChartConfig;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_defaults() {
        assert!(validate_args(&ReportArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_data_path() {
        let args = ReportArgs {
            data_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_chart_size() {
        let args = ReportArgs {
            chart_config: ChartConfig::new().with_width(50),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());

        let args = ReportArgs {
            chart_config: ChartConfig::new().with_height(20_000),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_best_margin_ignores_undefined() {
        let records = vec![
            Record {
                region: "West".to_string(),
                sales: 100.0,
                profit: 10.0,
                ..Default::default()
            },
            Record {
                region: "South".to_string(),
                sales: 50.0,
                profit: 10.0,
                ..Default::default()
            },
            Record {
                region: "North".to_string(),
                sales: 0.0,
                profit: 5.0,
                ..Default::default()
            },
        ];
        let table = summarize(&records, &Field::Region.into(), &DEFAULT_METRICS).unwrap();

        assert_eq!(best_margin(&table), Some("South (20.00%)".to_string()));

        let north: &SummaryRow = table
            .rows()
            .iter()
            .find(|r| r.key == vec![KeyValue::from("North")])
            .unwrap();
        assert_eq!(north.profit_margin, None);
    }
}
