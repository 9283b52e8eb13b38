//! Console formatting for summary tables and KPIs.

use crate::aggregator::{Kpis, SummaryTable};

/// Whole-dollar amount with thousands separators ("$2,297,201", "-$1,250")
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs() as u64))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Margin ratio as a 4-decimal string, "n/a" when undefined
pub fn format_margin(margin: Option<f64>) -> String {
    margin.map_or_else(|| "n/a".to_string(), |m| format!("{:.4}", m))
}

/// Headline KPI lines
pub fn format_kpis(kpis: &Kpis) -> String {
    let margin = kpis
        .profit_margin_pct
        .map_or_else(|| "n/a".to_string(), |pct| format!("{:.2}%", pct));

    format!(
        "Total Sales: {}\nTotal Profit: {}\nAverage Profit Margin: {}",
        format_currency(kpis.total_sales),
        format_currency(kpis.total_profit),
        margin
    )
}

/// Render a summary table as aligned plain text
///
/// Key columns are left-aligned, numbers right-aligned.
pub fn format_table(table: &SummaryTable) -> String {
    let key_fields = table.group_key().fields();

    let mut header: Vec<String> = key_fields.iter().map(|f| f.to_string()).collect();
    header.extend(table.metrics().iter().map(|m| m.to_string()));
    header.push("Profit_Margin".to_string());

    let body: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            let mut cells: Vec<String> = row.key.iter().map(ToString::to_string).collect();
            cells.extend(row.metrics.iter().map(|v| format!("{:.2}", v)));
            cells.push(format_margin(row.profit_margin));
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let key_count = key_fields.len();
    let render = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i < key_count {
                    format!("{:<width$}", cell, width = *width)
                } else {
                    format!("{:>width$}", cell, width = *width)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(header.as_slice())];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(body.iter().map(|cells| render(cells.as_slice())));

    if body.is_empty() {
        lines.push("(no rows)".to_string());
    }

    lines.join("\n")
}
