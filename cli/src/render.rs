//! Output rendering for search results.

use std::fmt::{self, Write};

use anyhow::Result;
use clap::ValueEnum;
use html_escape::{encode_double_quoted_attribute, encode_text};
use recipebox_core::{
    ChartDataSet, ChartKind, ChartRenderer, DisplayTable, Labeling, Report, SearchOutcome,
};

/// Width of the longest bar in text charts.
const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

pub fn render_outcome(outcome: &SearchOutcome, format: OutputFormat) -> Result<String> {
    let rendered = match (format, outcome) {
        (OutputFormat::Json, _) => serde_json::to_string_pretty(outcome)? + "\n",
        (_, SearchOutcome::Empty) => "No recipes found.\n".to_string(),
        (OutputFormat::Text, SearchOutcome::Report(report)) => render_text(report)?,
        (OutputFormat::Html, SearchOutcome::Report(report)) => render_html(report)?,
    };
    Ok(rendered)
}

fn render_text(report: &Report) -> Result<String, fmt::Error> {
    let mut out = text_table(&report.table)?;
    for chart in report.charts() {
        out.push('\n');
        out.push_str(&TextChartRenderer.render(chart)?);
    }
    Ok(out)
}

fn text_table(table: &DisplayTable) -> Result<String, fmt::Error> {
    let cells: Vec<[String; 4]> = table
        .rows
        .iter()
        .map(|row| {
            [
                row.number.to_string(),
                row.name.label.clone(),
                row.cooking_time.to_string(),
                row.difficulty.to_string(),
            ]
        })
        .collect();

    let mut header = vec![String::new()];
    header.extend(table.headers.iter().cloned());

    let mut widths = [0usize; 4];
    for (i, width) in widths.iter_mut().enumerate() {
        let column_max = cells.iter().map(|c| c[i].chars().count()).max().unwrap_or(0);
        let header_len = header.get(i).map(|h| h.chars().count()).unwrap_or(0);
        *width = column_max.max(header_len);
    }

    let line = |out: &mut String, values: &[String]| -> fmt::Result {
        let padded: Vec<String> = values
            .iter()
            .zip(widths.iter())
            .map(|(v, w)| format!("{:<width$}", v, width = *w))
            .collect();
        writeln!(out, "{}", padded.join("  ").trim_end())
    };

    let mut out = String::new();
    line(&mut out, &header)?;
    for row in &cells {
        line(&mut out, row)?;
    }
    Ok(out)
}

/// Draws charts as horizontal bars scaled to the largest value.
pub struct TextChartRenderer;

impl ChartRenderer for TextChartRenderer {
    type Output = Result<String, fmt::Error>;

    fn render(&self, chart: &ChartDataSet) -> Self::Output {
        let mut out = String::new();
        writeln!(
            out,
            "{} ({}, {})",
            chart.chart_id,
            kind_name(chart.kind),
            chart.value_label
        )?;

        let label_width = chart.points.iter().map(|p| p.label.chars().count()).max().unwrap_or(0);
        let max = chart.points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
        let total = chart.total();

        for point in &chart.points {
            let len = if max > 0.0 {
                ((point.value / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            write!(
                out,
                "  {:<width$} |{} {}",
                point.label,
                "#".repeat(len),
                point.value,
                width = label_width
            )?;
            if chart.kind == ChartKind::Pie && total > 0.0 {
                write!(out, " ({:.0}%)", point.value / total * 100.0)?;
            }
            out.push('\n');
        }
        Ok(out)
    }
}

/// Renders a chart as a `<figure>` holding its data table.
pub struct HtmlChartRenderer;

impl ChartRenderer for HtmlChartRenderer {
    type Output = Result<String, fmt::Error>;

    fn render(&self, chart: &ChartDataSet) -> Self::Output {
        let label_header = match chart.labeling {
            Labeling::PerRecord => "Recipe",
            Labeling::CountByCategory => "Difficulty",
        };

        let mut out = String::new();
        writeln!(
            out,
            "<figure class=\"chart chart-{}\" data-chart-id=\"{}\">",
            kind_name(chart.kind),
            encode_double_quoted_attribute(&chart.chart_id)
        )?;
        writeln!(
            out,
            "  <figcaption>Chart {}</figcaption>",
            encode_text(&chart.chart_id)
        )?;
        writeln!(out, "  <table>")?;
        writeln!(
            out,
            "    <tr><th>{}</th><th>{}</th></tr>",
            label_header,
            encode_text(&chart.value_label)
        )?;
        for point in &chart.points {
            writeln!(
                out,
                "    <tr><td>{}</td><td>{}</td></tr>",
                encode_text(&point.label),
                point.value
            )?;
        }
        writeln!(out, "  </table>")?;
        writeln!(out, "</figure>")?;
        Ok(out)
    }
}

fn render_html(report: &Report) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "<table class=\"recipes\">")?;

    let headers: String = std::iter::once(String::from("<th></th>"))
        .chain(
            report
                .table
                .headers
                .iter()
                .map(|h| format!("<th>{}</th>", encode_text(h))),
        )
        .collect();
    writeln!(out, "  <tr>{}</tr>", headers)?;

    for row in &report.table.rows {
        writeln!(
            out,
            "  <tr><th>{}</th><td><a href=\"{}\">{}</a></td><td>{}</td><td>{}</td></tr>",
            row.number,
            encode_double_quoted_attribute(&row.name.href),
            encode_text(&row.name.label),
            row.cooking_time,
            row.difficulty
        )?;
    }
    writeln!(out, "</table>")?;

    for chart in report.charts() {
        out.push_str(&HtmlChartRenderer.render(chart)?);
    }
    Ok(out)
}

fn kind_name(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Bar => "bar",
        ChartKind::Pie => "pie",
        ChartKind::Line => "line",
    }
}
