//! Rendering sink for analysis results.
//!
//! Analysis sections never write files or print directly; they hand tables and
//! chart specs to a `RenderSink`.

use super::svg::write_svg;
use super::table::format_table;
use crate::aggregator::SummaryTable;
use crate::chart::{render_scatter, render_table_chart, ChartConfig, ChartSpec};
use crate::utils::error::OutputError;
use log::debug;
use std::io::Write;
use std::path::PathBuf;

/// Consumer of summary tables and chart specifications
pub trait RenderSink {
    /// Render a chart over a summary table
    fn render_chart(&mut self, table: &SummaryTable, spec: &ChartSpec) -> Result<(), OutputError>;

    /// Render a scatter plot over raw points
    fn render_scatter(&mut self, points: &[(f64, f64)], spec: &ChartSpec) -> Result<(), OutputError>;

    /// Print a titled summary table
    fn print_table(&mut self, title: &str, table: &SummaryTable) -> Result<(), OutputError>;

    /// Print free text (KPI lines, correlation matrices)
    fn print_text(&mut self, text: &str) -> Result<(), OutputError>;
}

/// Sink that writes charts as SVG files and prints text to a writer
///
/// With no chart directory, chart requests are skipped.
pub struct FileSink<W: Write> {
    chart_dir: Option<PathBuf>,
    config: ChartConfig,
    out: W,
    written: Vec<PathBuf>,
}

impl<W: Write> FileSink<W> {
    pub fn new(chart_dir: Option<PathBuf>, config: ChartConfig, out: W) -> Self {
        Self {
            chart_dir,
            config,
            out,
            written: Vec::new(),
        }
    }

    /// Chart files written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn save(&mut self, spec: &ChartSpec, svg: &str) -> Result<(), OutputError> {
        if let Some(dir) = &self.chart_dir {
            let path = dir.join(format!("{}.svg", spec.file_stem()));
            write_svg(svg, &path)?;
            self.written.push(path);
        }
        Ok(())
    }
}

impl<W: Write> RenderSink for FileSink<W> {
    fn render_chart(&mut self, table: &SummaryTable, spec: &ChartSpec) -> Result<(), OutputError> {
        if self.chart_dir.is_none() {
            debug!("Charts disabled, skipping '{}'", spec.title);
            return Ok(());
        }
        let svg = render_table_chart(table, spec, Some(&self.config))?;
        self.save(spec, &svg)
    }

    fn render_scatter(&mut self, points: &[(f64, f64)], spec: &ChartSpec) -> Result<(), OutputError> {
        if self.chart_dir.is_none() {
            debug!("Charts disabled, skipping '{}'", spec.title);
            return Ok(());
        }
        let svg = render_scatter(points, spec, Some(&self.config))?;
        self.save(spec, &svg)
    }

    fn print_table(&mut self, title: &str, table: &SummaryTable) -> Result<(), OutputError> {
        writeln!(self.out, "\n{}", title)?;
        writeln!(self.out, "{}", format_table(table))?;
        Ok(())
    }

    fn print_text(&mut self, text: &str) -> Result<(), OutputError> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{summarize, DEFAULT_METRICS};
    use crate::chart::{ChartKind, Series};
    use crate::dataset::{Field, Record};

    fn region_table() -> SummaryTable {
        let records = vec![
            Record {
                region: "West".to_string(),
                sales: 100.0,
                profit: 20.0,
                ..Default::default()
            },
            Record {
                region: "East".to_string(),
                sales: 60.0,
                profit: -6.0,
                ..Default::default()
            },
        ];
        summarize(&records, &Field::Region.into(), &DEFAULT_METRICS).unwrap()
    }

    #[test]
    fn test_file_sink_writes_chart_named_after_title() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(
            Some(temp_dir.path().to_path_buf()),
            ChartConfig::default(),
            Vec::new(),
        );
        let spec = ChartSpec::new(ChartKind::Bar, "Profit Margin by Region")
            .with_x("Region")
            .with_series(Series::ProfitMargin);

        sink.render_chart(&region_table(), &spec).unwrap();

        let expected = temp_dir.path().join("profit_margin_by_region.svg");
        assert_eq!(sink.written(), &[expected.clone()]);
        assert!(std::fs::read_to_string(expected).unwrap().starts_with("<svg"));
    }

    #[test]
    fn test_file_sink_without_dir_skips_charts() {
        let mut sink = FileSink::new(None, ChartConfig::default(), Vec::new());
        let spec = ChartSpec::new(ChartKind::Bar, "Skipped").with_series(Series::ProfitMargin);

        sink.render_chart(&region_table(), &spec).unwrap();
        sink.render_scatter(&[(0.1, 1.0)], &spec).unwrap();

        assert!(sink.written().is_empty());
    }

    #[test]
    fn test_file_sink_prints_tables() {
        let mut sink = FileSink::new(None, ChartConfig::default(), Vec::new());
        sink.print_table("By region", &region_table()).unwrap();
        sink.print_text("done").unwrap();

        let printed = String::from_utf8(sink.into_inner()).unwrap();
        assert!(printed.contains("By region"));
        assert!(printed.contains("West"));
        assert!(printed.ends_with("done\n"));
    }
}
