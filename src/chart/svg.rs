//! Plotters-powered SVG charts.
//!
//! Rendering state is an explicit [`SvgChart`] value (output path + canvas
//! size) constructed and owned by the caller; there is no process-global
//! figure or canvas. Each render call draws one complete chart and flushes
//! it to disk.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::domain::GroupTotal;
use crate::error::AppError;
use crate::plot::histogram::Histogram;

/// One SVG output target.
pub struct SvgChart {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl SvgChart {
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Draw a vertical bar chart of a ranked aggregate, in the order given.
    pub fn render_bar(
        &self,
        groups: &[GroupTotal],
        title: &str,
        x_desc: &str,
        y_desc: &str,
    ) -> Result<(), AppError> {
        if groups.is_empty() {
            return Ok(());
        }

        let root = SVGBackend::new(&self.path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| self.draw_err(e))?;

        let y_max = groups
            .iter()
            .map(|g| g.total_revenue)
            .fold(0.0_f64, f64::max)
            .max(1e-9)
            * 1.05;
        let n = groups.len() as i32;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .caption(title, ("sans-serif", 20))
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .build_cartesian_2d(0i32..n, 0f64..y_max)
            .map_err(|e| self.draw_err(e))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(x_desc)
            .y_desc(y_desc)
            .x_labels(groups.len())
            // Integer ticks index into the (already ranked) group list; out of
            // range ticks get an empty label.
            .x_label_formatter(&|idx: &i32| {
                usize::try_from(*idx)
                    .ok()
                    .and_then(|i| groups.get(i))
                    .map(|g| g.key.clone())
                    .unwrap_or_default()
            })
            .draw()
            .map_err(|e| self.draw_err(e))?;

        chart
            .draw_series(groups.iter().enumerate().map(|(i, g)| {
                Rectangle::new(
                    [(i as i32, 0.0), (i as i32 + 1, g.total_revenue)],
                    BLUE.mix(0.5).filled(),
                )
            }))
            .map_err(|e| self.draw_err(e))?;

        root.present().map_err(|e| self.draw_err(e))
    }

    /// Draw a frequency histogram from precomputed equal-width buckets.
    pub fn render_histogram(
        &self,
        hist: &Histogram,
        title: &str,
        x_desc: &str,
        y_desc: &str,
    ) -> Result<(), AppError> {
        let (Some(&lo), Some(&hi)) = (hist.edges.first(), hist.edges.last()) else {
            return Ok(());
        };
        if !(hi > lo) {
            return Ok(());
        }

        let root = SVGBackend::new(&self.path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| self.draw_err(e))?;

        let y_max = hist.counts.iter().copied().max().unwrap_or(0).max(1) as f64 * 1.05;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .caption(title, ("sans-serif", 20))
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .build_cartesian_2d(lo..hi, 0f64..y_max)
            .map_err(|e| self.draw_err(e))?;

        chart
            .configure_mesh()
            .x_desc(x_desc)
            .y_desc(y_desc)
            .draw()
            .map_err(|e| self.draw_err(e))?;

        chart
            .draw_series(hist.counts.iter().enumerate().map(|(i, &count)| {
                Rectangle::new(
                    [(hist.edges[i], 0.0), (hist.edges[i + 1], count as f64)],
                    BLUE.mix(0.5).filled(),
                )
            }))
            .map_err(|e| self.draw_err(e))?;

        root.present().map_err(|e| self.draw_err(e))
    }

    fn draw_err(&self, e: impl std::fmt::Display) -> AppError {
        AppError::render(format!(
            "Failed to render chart '{}': {e}",
            self.path.display()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::histogram::build_histogram;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sales-report-{}-{name}", std::process::id()))
    }

    #[test]
    fn bar_chart_writes_an_svg_file() {
        let path = temp_path("bar.svg");
        let groups = vec![
            GroupTotal {
                key: "West".to_string(),
                total_revenue: 100.0,
                rows: 1,
            },
            GroupTotal {
                key: "East".to_string(),
                total_revenue: 40.0,
                rows: 2,
            },
        ];

        let chart = SvgChart::new(&path, 640, 480);
        chart
            .render_bar(&groups, "Total Revenue by Region", "Region", "Revenue")
            .unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.contains("<svg"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn histogram_writes_an_svg_file() {
        let path = temp_path("hist.svg");
        let hist = build_histogram(&[1.0, 2.0, 2.0, 9.0], 3).unwrap();

        let chart = SvgChart::new(&path, 640, 480);
        chart
            .render_histogram(&hist, "Distribution of Units Sold", "Units Sold", "Frequency")
            .unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.contains("<svg"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn empty_aggregate_draws_nothing() {
        let path = temp_path("empty.svg");
        let chart = SvgChart::new(&path, 640, 480);
        chart.render_bar(&[], "t", "x", "y").unwrap();
        assert!(!path.exists());
    }
}
