//! ASCII bar charts for terminal output.
//!
//! This is intentionally "dumb" (fixed-width bars), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Chart elements:
//! - one row per group/bucket
//! - bar length proportional to the row's value, `#` glyphs
//! - the numeric value printed after the bar

use crate::domain::GroupTotal;
use crate::plot::histogram::Histogram;

/// Render a horizontal bar chart of a ranked aggregate.
///
/// Rows are drawn in the order given (the aggregate is already ranked).
pub fn render_bar_chart(groups: &[GroupTotal], width: usize) -> String {
    if groups.is_empty() {
        return String::new();
    }

    let width = width.max(10);
    let label_width = groups
        .iter()
        .map(|g| g.key.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(4, 20);

    let max_value = groups
        .iter()
        .map(|g| g.total_revenue)
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for g in groups {
        let bar = bar_glyphs(g.total_revenue, max_value, width);
        out.push_str(&format!(
            "{:<label_width$} | {}{}{:.2}\n",
            truncate(&g.key, label_width),
            bar,
            if bar.is_empty() { "" } else { " " },
            g.total_revenue,
        ));
    }
    out
}

/// Render a frequency histogram with one row per bucket.
///
/// Buckets are half-open except the last, which is closed; the brackets in
/// the row labels spell that out.
pub fn render_histogram(hist: &Histogram, width: usize) -> String {
    let width = width.max(10);
    let max_count = hist.counts.iter().copied().max().unwrap_or(0);

    let mut out = String::new();
    for (i, &count) in hist.counts.iter().enumerate() {
        let lo = hist.edges[i];
        let hi = hist.edges[i + 1];
        let close = if i + 1 == hist.counts.len() { ']' } else { ')' };
        let bar = bar_glyphs(count as f64, max_count as f64, width);
        out.push_str(&format!(
            "[{lo:>8.2}, {hi:>8.2}{close} {count:>5} | {bar}\n"
        ));
    }
    out
}

fn bar_glyphs(value: f64, max: f64, width: usize) -> String {
    if !(max > 0.0) || value <= 0.0 {
        return String::new();
    }
    let n = ((value / max) * width as f64).round() as usize;
    "#".repeat(n.min(width))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
