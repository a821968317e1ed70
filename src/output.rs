//! Text rendering of ratings and summaries for the terminal.
//!
//! Supports a ratings table, text bar charts, and JSON export.

use std::fmt::Write;

use anyhow::Result;

use crate::analyzers::types::{GroupCount, Summary};
use crate::locale::Labels;
use crate::record::Dataset;

const BAR_WIDTH: usize = 40;

/// Renders a composite score as five star glyphs, filled for each whole point.
pub fn stars(score: f64) -> String {
    let filled = score.trunc().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Renders the ratings table in submission order.
pub fn render_ratings(dataset: &Dataset, labels: &Labels) -> String {
    let header = [
        labels.country,
        labels.club,
        labels.position,
        labels.name,
        labels.stars,
        labels.comments,
    ]
    .map(String::from);

    let rows: Vec<[String; 6]> = dataset
        .iter()
        .map(|r| {
            [
                r.country().to_string(),
                r.club().to_string(),
                r.position().to_string(),
                r.name().to_string(),
                stars(r.composite_score()),
                r.comment().replace('\n', " "),
            ]
        })
        .collect();

    let mut widths = header.clone().map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = format!("{}\n\n", labels.recent_ratings);
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

/// Renders every summary view as a titled text bar chart.
pub fn render_summary(summary: &Summary, labels: &Labels) -> String {
    let mut out = format!("{}\n", labels.data_visualization);

    chart(
        &mut out,
        labels.distributions,
        &[
            (labels.reliable.to_string(), summary.reliability.reliable as f64),
            (
                labels.not_reliable.to_string(),
                summary.reliability.not_reliable as f64,
            ),
        ],
        5.0f64.max(summary.reliability.total() as f64),
        |v| format!("{v}"),
    );

    let criteria: Vec<_> = summary
        .criteria
        .iter()
        .map(|c| (labels.criterion(c.criterion).to_string(), c.average))
        .collect();
    chart(&mut out, labels.average_ratings, &criteria, 5.0, |v| {
        format!("{v:.2}")
    });

    let counts = |groups: &[GroupCount]| -> Vec<(String, f64)> {
        groups
            .iter()
            .map(|g| (g.key.clone(), g.count as f64))
            .collect()
    };
    let total = summary.total_ratings as f64;
    chart(
        &mut out,
        labels.number_by_country,
        &counts(summary.by_country.as_slice()),
        total,
        |v| format!("{v}"),
    );
    chart(
        &mut out,
        labels.number_by_club,
        &counts(summary.top_clubs.as_slice()),
        total,
        |v| format!("{v}"),
    );

    let rates: Vec<_> = summary
        .reliability_by_country
        .iter()
        .map(|g| (g.key.clone(), g.rate))
        .collect();
    chart(&mut out, labels.average_reliability, &rates, 1.0, |v| {
        format!("{v:.2}")
    });

    out
}

fn chart(
    out: &mut String,
    title: &str,
    bars: &[(String, f64)],
    max: f64,
    fmt_value: impl Fn(f64) -> String,
) {
    let label_width = bars.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let _ = writeln!(out, "\n{title}");
    for (label, value) in bars {
        let len = if max > 0.0 {
            ((value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let pad = label_width - label.chars().count();
        let _ = writeln!(
            out,
            "  {label}{} {} {}",
            " ".repeat(pad),
            "█".repeat(len.min(BAR_WIDTH)),
            fmt_value(*value)
        );
    }
}

/// Serializes a summary as pretty-printed JSON.
pub fn summary_json(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
