//! SVG chart generation for summary tables.
//!
//! Charts are written as plain SVG strings, no plotting backend involved:
//! - Bar and horizontal bar charts, one bar per table row and series
//! - Line charts, one polyline per series in table row order
//! - Scatter plots over raw (x, y) points

use crate::aggregator::SummaryTable;
use crate::dataset::Metric;
use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
use crate::utils::error::ChartError;
use log::{debug, info};

const MARGIN_TOP: f64 = 50.0;
const MARGIN_RIGHT: f64 = 30.0;
const TICK_COUNT: usize = 5;
const MAX_LINE_LABELS: usize = 12;

const PALETTE: [&str; 6] = [
    "rgb(70, 130, 180)",  // Steel Blue
    "rgb(255, 140, 0)",   // Dark Orange
    "rgb(34, 139, 34)",   // Forest Green
    "rgb(220, 20, 60)",   // Crimson
    "rgb(138, 43, 226)",  // Blue Violet
    "rgb(169, 169, 169)", // Gray
];

/// Chart shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Line,
    Scatter,
}

/// A plotted column of a summary table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Metric(Metric),
    ProfitMargin,
}

impl Series {
    pub fn label(&self) -> &'static str {
        match self {
            Series::Metric(metric) => metric.name(),
            Series::ProfitMargin => "Profit Margin",
        }
    }

    /// One value per table row; `None` where the value is undefined
    fn values(&self, table: &SummaryTable) -> Result<Vec<Option<f64>>, ChartError> {
        match self {
            Series::Metric(metric) => table
                .metric_values(*metric)
                .map(|values| values.into_iter().map(Some).collect())
                .ok_or_else(|| ChartError::UnknownSeries(metric.to_string())),
            Series::ProfitMargin => Ok(table.rows().iter().map(|r| r.profit_margin).collect()),
        }
    }
}

impl From<Metric> for Series {
    fn from(metric: Metric) -> Self {
        Series::Metric(metric)
    }
}

/// What to draw: kind, axis label, plotted series and title
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x: String,
    pub y: Vec<Series>,
    pub title: String,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            x: String::new(),
            y: Vec::new(),
            title: title.into(),
        }
    }

    pub fn with_x(mut self, x: impl Into<String>) -> Self {
        self.x = x.into();
        self
    }

    pub fn with_series(mut self, series: impl Into<Series>) -> Self {
        self.y.push(series.into());
        self
    }

    /// Axis label for the value axis
    pub fn y_label(&self) -> String {
        self.y.iter().map(Series::label).collect::<Vec<_>>().join(" / ")
    }

    /// File-name friendly version of the title ("Profit Margin by Region" -> "profit_margin_by_region")
    pub fn file_stem(&self) -> String {
        let mut stem = String::new();
        for c in self.title.chars() {
            if c.is_ascii_alphanumeric() {
                stem.push(c.to_ascii_lowercase());
            } else if !stem.ends_with('_') && !stem.is_empty() {
                stem.push('_');
            }
        }
        let stem = stem.trim_end_matches('_').to_string();
        if stem.is_empty() {
            "chart".to_string()
        } else {
            stem
        }
    }
}

/// Chart canvas configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }
}

/// Linear mapping from a value domain onto pixel range
#[derive(Debug, Clone, Copy)]
struct Scale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl Scale {
    fn new((d0, d1): (f64, f64), r0: f64, r1: f64) -> Self {
        Self { d0, d1, r0, r1 }
    }

    fn map(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    fn ticks(&self) -> Vec<f64> {
        (0..=TICK_COUNT)
            .map(|i| self.d0 + (self.d1 - self.d0) * i as f64 / TICK_COUNT as f64)
            .collect()
    }
}

/// Plot area inside the canvas
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Frame {
    fn new(config: &ChartConfig, margin_left: f64, margin_bottom: f64) -> Self {
        let width = config.width as f64;
        let height = config.height as f64;
        Self {
            left: margin_left,
            top: MARGIN_TOP,
            right: (width - MARGIN_RIGHT).max(margin_left + 1.0),
            bottom: (height - margin_bottom).max(MARGIN_TOP + 1.0),
        }
    }

    fn width(&self) -> f64 {
        self.right - self.left
    }

    fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Render a chart over a summary table
///
/// **Public** - main entry point for table charts
///
/// # Errors
/// * `ChartError::EmptyTable` - table has no rows
/// * `ChartError::MissingSeries` - spec has too few y series for its kind
/// * `ChartError::UnknownSeries` - a series metric is not in the table
/// * `ChartError::NoPlottableValues` - every value is undefined
pub fn render_table_chart(
    table: &SummaryTable,
    spec: &ChartSpec,
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    if table.is_empty() {
        return Err(ChartError::EmptyTable);
    }

    let config = config.cloned().unwrap_or_default();
    info!("Rendering {:?} chart '{}' over {} rows", spec.kind, spec.title, table.len());

    if spec.kind == ChartKind::Scatter {
        if spec.y.len() < 2 {
            return Err(ChartError::MissingSeries(2));
        }
        let xs = spec.y[0].values(table)?;
        let ys = spec.y[1].values(table)?;
        let points: Vec<(f64, f64)> = xs
            .into_iter()
            .zip(ys)
            .filter_map(|(x, y)| Some((x?, y?)))
            .collect();
        return render_scatter(&points, spec, Some(&config));
    }

    if spec.y.is_empty() {
        return Err(ChartError::MissingSeries(1));
    }

    let labels: Vec<String> = table.rows().iter().map(|r| r.key_label()).collect();
    let series = spec
        .y
        .iter()
        .map(|s| -> Result<NamedSeries, ChartError> { Ok((s.label(), s.values(table)?)) })
        .collect::<Result<Vec<_>, _>>()?;

    let domain = value_domain(
        series.iter().flat_map(|(_, values)| values.iter().flatten().copied()),
        spec.kind != ChartKind::Line,
    )
    .ok_or_else(|| ChartError::NoPlottableValues(spec.title.clone()))?;

    let mut svg = String::new();
    open_svg(&mut svg, &config, &spec.title);

    match spec.kind {
        ChartKind::Bar => render_bars(&mut svg, &config, spec, &labels, &series, domain),
        ChartKind::HorizontalBar => {
            render_horizontal_bars(&mut svg, &config, spec, &labels, &series, domain)
        }
        ChartKind::Line => render_lines(&mut svg, &config, spec, &labels, &series, domain),
        ChartKind::Scatter => unreachable!("scatter handled above"),
    }

    if series.len() > 1 {
        render_legend(&mut svg, &config, series.iter().map(|(label, _)| *label));
    }

    svg.push_str("</svg>");
    info!("Chart generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

/// Render a scatter plot over raw points
///
/// **Public** - used for record-level relationships (discount vs profit)
pub fn render_scatter(
    points: &[(f64, f64)],
    spec: &ChartSpec,
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    let config = config.cloned().unwrap_or_default();
    let points: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    let no_values = || ChartError::NoPlottableValues(spec.title.clone());
    let x_domain = value_domain(points.iter().map(|p| p.0), false).ok_or_else(no_values)?;
    let y_domain = value_domain(points.iter().map(|p| p.1), false).ok_or_else(no_values)?;

    debug!("Rendering scatter '{}' with {} points", spec.title, points.len());

    let frame = Frame::new(&config, 80.0, 60.0);
    let x_scale = Scale::new(x_domain, frame.left, frame.right);
    let y_scale = Scale::new(y_domain, frame.bottom, frame.top);

    let mut svg = String::new();
    open_svg(&mut svg, &config, &spec.title);
    render_value_grid(&mut svg, &frame, &y_scale, false);

    for tick in x_scale.ticks() {
        let x = x_scale.map(tick);
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" class="tick" text-anchor="middle">{}</text>"#,
            x,
            frame.bottom + 18.0,
            format_tick(tick)
        ));
    }

    let color = PALETTE[0];
    for (x, y) in &points {
        svg.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="3" fill="{}" fill-opacity="0.5"/>"#,
            x_scale.map(*x),
            y_scale.map(*y),
            color
        ));
    }

    let y_label = if spec.y.is_empty() {
        String::new()
    } else {
        spec.y_label()
    };
    render_axis_labels(&mut svg, &config, &frame, &spec.x, &y_label);

    svg.push_str("</svg>");
    info!("Scatter generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

type NamedSeries = (&'static str, Vec<Option<f64>>);

fn render_bars(
    svg: &mut String,
    config: &ChartConfig,
    spec: &ChartSpec,
    labels: &[String],
    series: &[NamedSeries],
    domain: (f64, f64),
) {
    let frame = Frame::new(config, 80.0, 110.0);
    let scale = Scale::new(domain, frame.bottom, frame.top);
    render_value_grid(svg, &frame, &scale, false);

    let band = frame.width() / labels.len() as f64;
    let bar_width = band * 0.8 / series.len() as f64;
    let zero = scale.map(0.0);

    for (i, label) in labels.iter().enumerate() {
        let band_start = frame.left + band * i as f64 + band * 0.1;

        for (s, (name, values)) in series.iter().enumerate() {
            let Some(value) = values[i] else { continue };
            let y = scale.map(value);
            svg.push_str(&format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" class="bar"><title>{}: {} = {}</title></rect>"#,
                band_start + bar_width * s as f64,
                y.min(zero),
                bar_width,
                (y - zero).abs(),
                PALETTE[s % PALETTE.len()],
                escape_xml(label),
                name,
                format_value(value)
            ));
        }

        let cx = frame.left + band * (i as f64 + 0.5);
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" class="tick" text-anchor="end" transform="rotate(-35 {:.2} {:.2})">{}</text>"#,
            cx,
            frame.bottom + 16.0,
            cx,
            frame.bottom + 16.0,
            escape_xml(label)
        ));
    }

    render_baseline(svg, frame.left, zero, frame.right, zero);
    render_axis_labels(svg, config, &frame, &spec.x, &spec.y_label());
}

fn render_horizontal_bars(
    svg: &mut String,
    config: &ChartConfig,
    spec: &ChartSpec,
    labels: &[String],
    series: &[NamedSeries],
    domain: (f64, f64),
) {
    let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let margin_left = (longest as f64 * 7.0 + 20.0).clamp(80.0, config.width as f64 / 2.0);
    let frame = Frame::new(config, margin_left, 60.0);
    let scale = Scale::new(domain, frame.left, frame.right);
    render_value_grid(svg, &frame, &scale, true);

    let band = frame.height() / labels.len() as f64;
    let bar_height = band * 0.8 / series.len() as f64;
    let zero = scale.map(0.0);

    for (i, label) in labels.iter().enumerate() {
        let band_start = frame.top + band * i as f64 + band * 0.1;

        for (s, (name, values)) in series.iter().enumerate() {
            let Some(value) = values[i] else { continue };
            let x = scale.map(value);
            svg.push_str(&format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" class="bar"><title>{}: {} = {}</title></rect>"#,
                x.min(zero),
                band_start + bar_height * s as f64,
                (x - zero).abs(),
                bar_height,
                PALETTE[s % PALETTE.len()],
                escape_xml(label),
                name,
                format_value(value)
            ));
        }

        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" class="tick" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            frame.left - 6.0,
            frame.top + band * (i as f64 + 0.5),
            escape_xml(label)
        ));
    }

    render_baseline(svg, zero, frame.top, zero, frame.bottom);
    // Value axis runs horizontally here, category axis vertically
    render_axis_labels(svg, config, &frame, &spec.y_label(), "");
}

fn render_lines(
    svg: &mut String,
    config: &ChartConfig,
    spec: &ChartSpec,
    labels: &[String],
    series: &[NamedSeries],
    domain: (f64, f64),
) {
    let frame = Frame::new(config, 80.0, 90.0);
    let scale = Scale::new(domain, frame.bottom, frame.top);
    render_value_grid(svg, &frame, &scale, false);

    let n = labels.len();
    let x_at = |i: usize| {
        if n == 1 {
            frame.left + frame.width() / 2.0
        } else {
            frame.left + frame.width() * i as f64 / (n - 1) as f64
        }
    };

    for (s, (name, values)) in series.iter().enumerate() {
        let color = PALETTE[s % PALETTE.len()];

        // Undefined values break the line into separate segments
        let mut segment: Vec<String> = Vec::new();
        let mut segments: Vec<Vec<String>> = Vec::new();
        for (i, value) in values.iter().enumerate() {
            match value {
                Some(v) => segment.push(format!("{:.2},{:.2}", x_at(i), scale.map(*v))),
                None => segments.push(std::mem::take(&mut segment)),
            }
        }
        segments.push(segment);

        for points in segments.iter().filter(|p| !p.is_empty()) {
            svg.push_str(&format!(
                r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"><title>{}</title></polyline>"#,
                points.join(" "),
                color,
                name
            ));
        }

        for (i, value) in values.iter().enumerate() {
            if let Some(v) = value {
                svg.push_str(&format!(
                    r#"<circle cx="{:.2}" cy="{:.2}" r="2.5" fill="{}"><title>{}: {} = {}</title></circle>"#,
                    x_at(i),
                    scale.map(*v),
                    color,
                    escape_xml(&labels[i]),
                    name,
                    format_value(*v)
                ));
            }
        }
    }

    let step = n.div_ceil(MAX_LINE_LABELS).max(1);
    for (i, label) in labels.iter().enumerate().step_by(step) {
        let x = x_at(i);
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" class="tick" text-anchor="end" transform="rotate(-45 {:.2} {:.2})">{}</text>"#,
            x,
            frame.bottom + 16.0,
            x,
            frame.bottom + 16.0,
            escape_xml(label)
        ));
    }

    if domain.0 < 0.0 && domain.1 > 0.0 {
        let zero = scale.map(0.0);
        render_baseline(svg, frame.left, zero, frame.right, zero);
    }
    render_axis_labels(svg, config, &frame, &spec.x, &spec.y_label());
}

/// Value domain over finite values, optionally anchored at zero
///
/// **Private** - returns None when there is nothing to plot
fn value_domain(values: impl Iterator<Item = f64>, include_zero: bool) -> Option<(f64, f64)> {
    let (mut lo, mut hi) = values
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;

    if include_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }

    if lo == hi {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
        return Some((lo - pad, hi + pad));
    }

    let pad = (hi - lo) * 0.05;
    if !(include_zero && lo == 0.0) {
        lo -= pad;
    }
    if !(include_zero && hi == 0.0) {
        hi += pad;
    }
    Some((lo, hi))
}

fn open_svg(svg: &mut String, config: &ChartConfig, title: &str) {
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, config.width, config.height
    ));
    svg.push_str(
        r#"<style>text { font-family: sans-serif; } .tick { font-size: 11px; fill: #444; } .bar:hover { opacity: 0.8; }</style>"#,
    );
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        config.width, config.height
    ));
    svg.push_str(&format!(
        r#"<text x="{}" y="28" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
        config.width / 2,
        escape_xml(title)
    ));
}

/// Grid lines and tick labels along the value axis
fn render_value_grid(svg: &mut String, frame: &Frame, scale: &Scale, horizontal_values: bool) {
    for tick in scale.ticks() {
        let pos = scale.map(tick);
        if horizontal_values {
            svg.push_str(&format!(
                r##"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#e0e0e0"/>"##,
                pos, frame.top, pos, frame.bottom
            ));
            svg.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" class="tick" text-anchor="middle">{}</text>"#,
                pos,
                frame.bottom + 16.0,
                format_tick(tick)
            ));
        } else {
            svg.push_str(&format!(
                r##"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#e0e0e0"/>"##,
                frame.left, pos, frame.right, pos
            ));
            svg.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" class="tick" text-anchor="end" dominant-baseline="middle">{}</text>"#,
                frame.left - 6.0,
                pos,
                format_tick(tick)
            ));
        }
    }
}

fn render_baseline(svg: &mut String, x1: f64, y1: f64, x2: f64, y2: f64) {
    svg.push_str(&format!(
        r##"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#333" stroke-width="1"/>"##,
        x1, y1, x2, y2
    ));
}

fn render_axis_labels(svg: &mut String, config: &ChartConfig, frame: &Frame, x_label: &str, y_label: &str) {
    if !x_label.is_empty() {
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{}" font-size="13" text-anchor="middle">{}</text>"#,
            frame.left + frame.width() / 2.0,
            config.height.saturating_sub(8),
            escape_xml(x_label)
        ));
    }
    if !y_label.is_empty() {
        let cy = frame.top + frame.height() / 2.0;
        svg.push_str(&format!(
            r#"<text x="16" y="{:.2}" font-size="13" text-anchor="middle" transform="rotate(-90 16 {:.2})">{}</text>"#,
            cy,
            cy,
            escape_xml(y_label)
        ));
    }
}

fn render_legend<'a>(svg: &mut String, config: &ChartConfig, labels: impl Iterator<Item = &'a str>) {
    let x = config.width as f64 - MARGIN_RIGHT - 130.0;
    for (i, label) in labels.enumerate() {
        let y = MARGIN_TOP + 4.0 + i as f64 * 18.0;
        svg.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="12" height="12" fill="{}" rx="2"/>"#,
            x,
            y,
            PALETTE[i % PALETTE.len()]
        ));
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="12">{}</text>"#,
            x + 18.0,
            y + 10.0,
            escape_xml(label)
        ));
    }
}

/// Compact tick label (12.5k, 1.2M, 0.25)
pub fn format_tick(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else if abs >= 10.0 || abs == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn format_value(value: f64) -> String {
    if value.abs() < 1.0 {
        format!("{:.4}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Escape text for use inside SVG elements
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_domain_anchors_zero_for_bars() {
        let (lo, hi) = value_domain([10.0, 20.0].into_iter(), true).unwrap();
        assert_eq!(lo, 0.0);
        assert!(hi > 20.0);

        let (lo, hi) = value_domain([-5.0, 15.0].into_iter(), true).unwrap();
        assert!(lo < -5.0);
        assert!(hi > 15.0);
    }

    #[test]
    fn test_value_domain_empty_and_flat() {
        assert_eq!(value_domain(std::iter::empty(), true), None);
        assert_eq!(value_domain([f64::NAN].into_iter(), false), None);
        assert_eq!(value_domain([0.0, 0.0].into_iter(), false), Some((-1.0, 1.0)));
    }

    #[test]
    fn test_scale_maps_inverted_range() {
        let scale = Scale::new((0.0, 100.0), 400.0, 100.0);
        assert_eq!(scale.map(0.0), 400.0);
        assert_eq!(scale.map(100.0), 100.0);
        assert_eq!(scale.map(50.0), 250.0);
        assert_eq!(scale.ticks().len(), TICK_COUNT + 1);
    }

    #[test]
    fn test_file_stem() {
        let spec = ChartSpec::new(ChartKind::Bar, "Profit Margin by Region");
        assert_eq!(spec.file_stem(), "profit_margin_by_region");

        let spec = ChartSpec::new(ChartKind::Line, "Monthly Sales & Profit Trend!");
        assert_eq!(spec.file_stem(), "monthly_sales_profit_trend");

        assert_eq!(ChartSpec::new(ChartKind::Bar, "--").file_stem(), "chart");
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(250.0), "250");
        assert_eq!(format_tick(12_500.0), "12.5k");
        assert_eq!(format_tick(-1_200_000.0), "-1.2M");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Art & <Craft>"), "Art &amp; &lt;Craft&gt;");
    }

    #[test]
    fn test_scatter_rejects_no_points() {
        let spec = ChartSpec::new(ChartKind::Scatter, "Empty");
        assert_eq!(
            render_scatter(&[(f64::NAN, 1.0)], &spec, None),
            Err(ChartError::NoPlottableValues("Empty".to_string()))
        );
    }
}
