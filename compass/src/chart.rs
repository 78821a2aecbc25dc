//! Typed chart configuration and SVG geometry.
//!
//! Only the options the page actually uses are modelled: series labels and
//! colours, borders, axis bounds, legend placement and a tooltip format.
//! Configurations are validated before any geometry is computed, so the
//! rendering components never see a chart that cannot be drawn.
//!
//! Angles are in radians, measured clockwise from 12 o'clock.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// SVG viewBox side for doughnut charts.
pub const DOUGHNUT_SIZE: f64 = 200.0;
const DOUGHNUT_RADIUS: f64 = 90.0;

/// SVG viewBox for bar charts.
pub const BAR_WIDTH: f64 = 600.0;
pub const BAR_HEIGHT: f64 = 320.0;
const BAR_PAD_LEFT: f64 = 40.0;
const BAR_PAD_RIGHT: f64 = 10.0;
const BAR_PAD_TOP: f64 = 10.0;
const BAR_PAD_BOTTOM: f64 = 50.0;
const BAR_FILL_RATIO: f64 = 0.6;
const Y_TICK_STEPS: usize = 5;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("chart `{0}` has no data")]
    Empty(String),

    #[error("chart `{chart}` has {labels} labels but {values} values")]
    LengthMismatch {
        chart: String,
        labels: usize,
        values: usize,
    },

    #[error("chart `{chart}` has {colors} colors for {values} values")]
    ColorMismatch {
        chart: String,
        colors: usize,
        values: usize,
    },

    #[error("value {value} for `{label}` is negative")]
    Negative { label: String, value: f64 },

    #[error("value {value} for `{label}` exceeds the axis max {max}")]
    AboveAxisMax { label: String, value: f64, max: f64 },

    #[error("doughnut `{0}` values sum to zero")]
    ZeroTotal(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    #[default]
    Bottom,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub display: bool,
    pub position: LegendPosition,
    pub color: String,
    pub font_size: u32,
}

impl Legend {
    pub fn hidden() -> Self {
        Self {
            display: false,
            ..Self::default()
        }
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            display: true,
            position: LegendPosition::Bottom,
            color: "#4B5563".into(),
            font_size: 14,
        }
    }
}

/// How a hovered data point is described.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "prefix", rename_all = "snake_case")]
pub enum TooltipFormat {
    /// `"{label}: {value}%"`
    LabelPercent,
    /// `"{prefix}: {value}"`
    Prefixed(String),
}

impl TooltipFormat {
    pub fn format(&self, label: &str, value: f64) -> String {
        match self {
            TooltipFormat::LabelPercent => format!("{label}: {value}%"),
            TooltipFormat::Prefixed(prefix) => format!("{prefix}: {value}"),
        }
    }
}

/// One dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub data: Vec<f64>,
    /// One colour per value, or a single colour for all of them
    pub colors: Vec<String>,
    pub border_color: Option<String>,
    pub border_width: f64,
    pub border_radius: f64,
}

impl Series {
    pub fn color_at(&self, idx: usize) -> &str {
        match self.colors.as_slice() {
            [] => "#9CA3AF",
            [single] => single.as_str(),
            many => many.get(idx).map(String::as_str).unwrap_or("#9CA3AF"),
        }
    }

    fn validate(&self, chart: &str, labels: &[String]) -> Result<(), ChartError> {
        if self.data.is_empty() {
            return Err(ChartError::Empty(chart.to_string()));
        }
        if labels.len() != self.data.len() {
            return Err(ChartError::LengthMismatch {
                chart: chart.to_string(),
                labels: labels.len(),
                values: self.data.len(),
            });
        }
        if self.colors.len() > 1 && self.colors.len() != self.data.len() {
            return Err(ChartError::ColorMismatch {
                chart: chart.to_string(),
                colors: self.colors.len(),
                values: self.data.len(),
            });
        }
        for (label, &value) in labels.iter().zip(&self.data) {
            if value < 0.0 {
                return Err(ChartError::Negative {
                    label: label.clone(),
                    value,
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub begin_at_zero: bool,
    pub max: Option<f64>,
    pub tick_color: String,
    /// Grid line colour; `None` hides the grid
    pub grid_color: Option<String>,
    pub font_size: u32,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            begin_at_zero: true,
            max: None,
            tick_color: "#4B5563".into(),
            grid_color: Some("#E5E7EB".into()),
            font_size: 12,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoughnutChart {
    pub title: String,
    pub labels: Vec<String>,
    pub series: Series,
    /// Hole radius as a percentage of the outer radius
    pub cutout_percent: f64,
    pub legend: Legend,
    pub tooltip: TooltipFormat,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub labels: Vec<String>,
    pub series: Series,
    pub y_axis: Axis,
    pub x_axis: Axis,
    pub legend: Legend,
    pub tooltip: TooltipFormat,
}

/// A drawable doughnut slice.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSegment {
    pub label: String,
    pub value: f64,
    pub color: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
    pub tooltip: String,
}

/// A drawable bar, in viewBox coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tooltip: String,
}

/// A y-axis tick: value and its vertical position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
}

impl DoughnutChart {
    pub fn validate(&self) -> Result<(), ChartError> {
        self.series.validate(&self.title, &self.labels)?;
        if self.total() <= 0.0 {
            return Err(ChartError::ZeroTotal(self.title.clone()));
        }
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.series.data.iter().sum()
    }

    pub fn inner_radius(&self) -> f64 {
        DOUGHNUT_RADIUS * self.cutout_percent.clamp(0.0, 99.0) / 100.0
    }

    pub fn segments(&self) -> Result<Vec<ArcSegment>, ChartError> {
        self.validate()?;
        let total = self.total();
        let center = DOUGHNUT_SIZE / 2.0;
        let inner = self.inner_radius();

        let mut start = 0.0;
        let segments = self
            .labels
            .iter()
            .zip(&self.series.data)
            .enumerate()
            .map(|(idx, (label, &value))| {
                let end = start + TAU * value / total;
                let segment = ArcSegment {
                    label: label.clone(),
                    value,
                    color: self.series.color_at(idx).to_string(),
                    start_angle: start,
                    end_angle: end,
                    path: ring_path(center, DOUGHNUT_RADIUS, inner, start, end),
                    tooltip: self.tooltip.format(label, value),
                };
                start = end;
                segment
            })
            .collect();
        Ok(segments)
    }
}

impl BarChart {
    pub fn validate(&self) -> Result<(), ChartError> {
        self.series.validate(&self.title, &self.labels)?;
        if let Some(max) = self.y_axis.max {
            for (label, &value) in self.labels.iter().zip(&self.series.data) {
                if value > max {
                    return Err(ChartError::AboveAxisMax {
                        label: label.clone(),
                        value,
                        max,
                    });
                }
            }
        }
        Ok(())
    }

    /// Lower and upper bound of the value axis.
    pub fn y_bounds(&self) -> (f64, f64) {
        let data = &self.series.data;
        let data_max = data.iter().copied().fold(0.0, f64::max);
        let data_min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let min = if self.y_axis.begin_at_zero || !data_min.is_finite() {
            0.0
        } else {
            data_min
        };
        let max = self.y_axis.max.unwrap_or(data_max);
        if max <= min { (min, min + 1.0) } else { (min, max) }
    }

    fn plot_height() -> f64 {
        BAR_HEIGHT - BAR_PAD_TOP - BAR_PAD_BOTTOM
    }

    fn y_for(&self, value: f64) -> f64 {
        let (min, max) = self.y_bounds();
        let ratio = ((value - min) / (max - min)).clamp(0.0, 1.0);
        BAR_PAD_TOP + Self::plot_height() * (1.0 - ratio)
    }

    /// Baseline of the plot area (y of the axis minimum).
    pub fn baseline(&self) -> f64 {
        BAR_PAD_TOP + Self::plot_height()
    }

    pub fn plot_left(&self) -> f64 {
        BAR_PAD_LEFT
    }

    pub fn plot_right(&self) -> f64 {
        BAR_WIDTH - BAR_PAD_RIGHT
    }

    pub fn bars(&self) -> Result<Vec<BarGeometry>, ChartError> {
        self.validate()?;
        let slot = (self.plot_right() - self.plot_left()) / self.labels.len() as f64;
        let width = slot * BAR_FILL_RATIO;
        let baseline = self.baseline();

        Ok(self
            .labels
            .iter()
            .zip(&self.series.data)
            .enumerate()
            .map(|(idx, (label, &value))| {
                let top = self.y_for(value);
                BarGeometry {
                    label: label.clone(),
                    value,
                    color: self.series.color_at(idx).to_string(),
                    x: self.plot_left() + slot * idx as f64 + (slot - width) / 2.0,
                    y: top,
                    width,
                    height: baseline - top,
                    tooltip: self.tooltip.format(label, value),
                }
            })
            .collect())
    }

    pub fn y_ticks(&self) -> Vec<AxisTick> {
        let (min, max) = self.y_bounds();
        let step = (max - min) / Y_TICK_STEPS as f64;
        (0..=Y_TICK_STEPS)
            .map(|i| {
                let value = min + step * i as f64;
                AxisTick {
                    value,
                    y: self.y_for(value),
                }
            })
            .collect()
    }
}

fn point(center: f64, radius: f64, angle: f64) -> (f64, f64) {
    (center + radius * angle.sin(), center - radius * angle.cos())
}

/// SVG path for a ring slice between two angles.
fn ring_path(center: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // A full-turn arc has coincident endpoints and would not render.
    let end = if end - start >= TAU { start + TAU - 1e-4 } else { end };
    let large = if end - start > TAU / 2.0 { 1 } else { 0 };
    let (ox0, oy0) = point(center, outer, start);
    let (ox1, oy1) = point(center, outer, end);
    let (ix1, iy1) = point(center, inner, end);
    let (ix0, iy0) = point(center, inner, start);
    format!(
        "M {ox0:.2} {oy0:.2} A {outer:.2} {outer:.2} 0 {large} 1 {ox1:.2} {oy1:.2} \
         L {ix1:.2} {iy1:.2} A {inner:.2} {inner:.2} 0 {large} 0 {ix0:.2} {iy0:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{demand_chart, rice_chart};
    use pretty_assertions::assert_eq;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn page_charts_are_valid() {
        demand_chart().validate().unwrap();
        rice_chart().validate().unwrap();
    }

    #[test]
    fn doughnut_arcs_cover_full_circle() {
        let segments = demand_chart().segments().unwrap();
        assert_eq!(segments.len(), 2);
        assert!(close(segments[0].start_angle, 0.0));
        assert!(close(segments[0].end_angle, TAU * 0.78));
        assert!(close(segments[1].start_angle, segments[0].end_angle));
        assert!(close(segments[1].end_angle, TAU));
    }

    #[test]
    fn doughnut_tooltips_use_label_percent() {
        let segments = demand_chart().segments().unwrap();
        assert_eq!(segments[0].tooltip, "Want AI-Driven Insights: 78%");
        assert_eq!(segments[1].tooltip, "Traditional Approach: 22%");
    }

    #[test]
    fn single_value_doughnut_still_draws() {
        let mut chart = demand_chart();
        chart.labels.truncate(1);
        chart.series.data = vec![5.0];
        chart.series.colors.truncate(1);
        let segments = chart.segments().unwrap();
        assert!(segments[0].path.starts_with("M 100.00 10.00"));
    }

    #[test]
    fn bar_heights_scale_to_axis_max() {
        let chart = rice_chart();
        let bars = chart.bars().unwrap();
        let plot = chart.baseline() - BAR_PAD_TOP;
        assert_eq!(bars.len(), 5);
        assert!(close(bars[0].height, plot * 0.85));
        assert!(close(bars[4].height, plot * 0.45));
        assert!(bars.iter().all(|b| close(b.y + b.height, chart.baseline())));
    }

    #[test]
    fn bar_tooltips_are_prefixed() {
        let bars = rice_chart().bars().unwrap();
        assert_eq!(bars[0].tooltip, "RICE Score: 85");
        assert_eq!(bars[3].tooltip, "RICE Score: 65");
    }

    #[test]
    fn y_ticks_span_axis() {
        let values: Vec<f64> = rice_chart().y_ticks().iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn mismatched_labels_are_rejected() {
        let mut chart = rice_chart();
        chart.labels.pop();
        assert_eq!(
            chart.validate(),
            Err(ChartError::LengthMismatch {
                chart: "RICE Prioritization".into(),
                labels: 4,
                values: 5,
            })
        );
    }

    #[test]
    fn partial_color_list_is_rejected_but_single_color_repeats() {
        let mut chart = rice_chart();
        chart.series.colors.truncate(2);
        assert!(matches!(chart.validate(), Err(ChartError::ColorMismatch { colors: 2, .. })));

        chart.series.colors.truncate(1);
        chart.validate().unwrap();
        assert_eq!(chart.series.color_at(4), chart.series.color_at(0));
    }

    #[test]
    fn value_above_axis_max_is_rejected() {
        let mut chart = rice_chart();
        chart.series.data[2] = 120.0;
        assert!(matches!(
            chart.bars(),
            Err(ChartError::AboveAxisMax { ref label, .. }) if label == "Bite-sized News"
        ));
    }

    #[test]
    fn empty_and_zero_total_doughnuts_are_rejected() {
        let mut chart = demand_chart();
        chart.series.data = vec![0.0, 0.0];
        assert_eq!(chart.validate(), Err(ChartError::ZeroTotal(chart.title.clone())));

        chart.labels.clear();
        chart.series.data.clear();
        assert!(matches!(chart.validate(), Err(ChartError::Empty(_))));
    }

    #[test]
    fn negative_values_are_rejected() {
        let mut chart = rice_chart();
        chart.series.data[0] = -1.0;
        assert!(matches!(chart.validate(), Err(ChartError::Negative { .. })));
    }
}
