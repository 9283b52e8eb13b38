//! Ad-hoc summarize command: one summary table for any key and metric list.

use super::models::SummarizeArgs;
use crate::aggregator::{summarize_with_options, GroupKey, SummarizeOptions, SummaryTable, ZeroDenominator};
use crate::dataset::{load_dataset, Dataset, Metric};
use crate::output::format_table;
use anyhow::{Context, Result};
use log::info;

/// Execute the summarize command and print the table
///
/// **Public** - called from main.rs
pub fn execute_summarize(args: SummarizeArgs) -> Result<SummaryTable> {
    let dataset = load_dataset(&args.data_path)
        .with_context(|| format!("Failed to load dataset from {}", args.data_path.display()))?;

    let table = summarize_dataset(&dataset, &args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        println!("{}", format_table(&table));
    }

    Ok(table)
}

/// Parse the key and metrics from `args` and summarize `dataset`
pub fn summarize_dataset(dataset: &Dataset, args: &SummarizeArgs) -> Result<SummaryTable> {
    let group_key = GroupKey::parse(&args.group_by)
        .with_context(|| format!("Invalid group key '{}'", args.group_by))?;

    let metrics = args
        .metrics
        .iter()
        .flat_map(|m| m.split(','))
        .filter(|m| !m.trim().is_empty())
        .map(str::parse::<Metric>)
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid metric list")?;

    let zero_denominator = if args.strict_margin {
        ZeroDenominator::Error
    } else {
        ZeroDenominator::Undefined
    };
    let options = SummarizeOptions::default()
        .with_dropna(args.dropna)
        .with_zero_denominator(zero_denominator);

    info!("Summarizing {} records by {}", dataset.len(), group_key);

    let table = summarize_with_options(dataset.records(), &group_key, &metrics, options)
        .with_context(|| format!("Failed to summarize by {}", group_key))?;

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Record {
                category: "Furniture".to_string(),
                sub_category: "Tables".to_string(),
                sales: 300.0,
                profit: -60.0,
                quantity: 2,
                ..Default::default()
            },
            Record {
                category: "Technology".to_string(),
                sub_category: "Phones".to_string(),
                sales: 500.0,
                profit: 90.0,
                quantity: 5,
                ..Default::default()
            },
        ])
    }

    #[test]
    fn test_summarize_dataset_parses_comma_lists() {
        let args = SummarizeArgs {
            group_by: "Category,Sub-Category".to_string(),
            metrics: vec!["Sales,Profit".to_string(), "Quantity".to_string()],
            ..Default::default()
        };

        let table = summarize_dataset(&dataset(), &args).unwrap();

        assert_eq!(table.metrics(), &[Metric::Sales, Metric::Profit, Metric::Quantity]);
        assert_eq!(table.rows()[0].key_label(), "Technology / Phones");
        assert_eq!(table.rows()[0].metrics, vec![500.0, 90.0, 5.0]);
    }

    #[test]
    fn test_summarize_dataset_rejects_unknown_names() {
        let args = SummarizeArgs {
            group_by: "Colour".to_string(),
            ..Default::default()
        };
        assert!(summarize_dataset(&dataset(), &args).is_err());

        let args = SummarizeArgs {
            metrics: vec!["Sales".to_string(), "Revenue".to_string()],
            ..Default::default()
        };
        assert!(summarize_dataset(&dataset(), &args).is_err());
    }

    #[test]
    fn test_summarize_dataset_strict_margin() {
        let zero_sales = Dataset::new(vec![Record {
            region: "Central".to_string(),
            sales: 0.0,
            profit: 3.0,
            ..Default::default()
        }]);
        let args = SummarizeArgs {
            strict_margin: true,
            ..Default::default()
        };

        assert!(summarize_dataset(&zero_sales, &args).is_err());
    }
}
