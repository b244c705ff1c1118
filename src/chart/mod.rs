//! Polar-area chart data and display options.
//!
//! [`ChartData::derive`] shapes the coordinate list into what the renderer in
//! [`ui`] consumes: one label, one value and one fill color per charted point,
//! plus a tooltip text per point. The first recorded coordinate is never
//! charted.

mod sweep;
pub mod ui;

pub use sweep::SweepState;

use crate::plotter::Coordinate;
use ratatui::style::Color;

/// Legend label of the single dataset.
pub const DATASET_LABEL: &str = "Polar Coordinates";

/// Fill color of every point.
pub const POINT_COLOR: Color = Color::Red;

/// One dataset of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Legend label.
    pub label: &'static str,
    /// Sector magnitudes.
    pub data: Vec<f64>,
    /// Fill color per sector.
    pub background_color: Vec<Color>,
}

/// Chart-ready view of a coordinate list.
#[derive(Debug, Clone, Copy)]
pub struct ChartData<'a> {
    points: &'a [Coordinate],
}

impl<'a> ChartData<'a> {
    /// Derive chart data from the full coordinate list.
    ///
    /// The first coordinate is dropped; the remaining ones are charted in
    /// insertion order.
    pub fn derive(coordinates: &'a [Coordinate]) -> Self {
        Self {
            points: coordinates.get(1..).unwrap_or(&[]),
        }
    }

    /// Number of charted points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing is charted.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Charted coordinate at `index`.
    pub fn point(&self, index: usize) -> Option<&'a Coordinate> {
        self.points.get(index)
    }

    /// Sector labels, `Point 1` onward.
    pub fn labels(&self) -> Vec<String> {
        (1..=self.points.len()).map(|n| format!("Point {}", n)).collect()
    }

    /// The single dataset: radii with a fixed fill color.
    pub fn dataset(&self) -> Dataset {
        Dataset {
            label: DATASET_LABEL,
            data: self.points.iter().map(Coordinate::radius).collect(),
            background_color: vec![POINT_COLOR; self.points.len()],
        }
    }

    /// Tooltip text for the point at `index`.
    pub fn tooltip_label(&self, index: usize) -> Option<String> {
        self.point(index).map(|p| {
            format!(
                "Angle: {}, Radius: {}, Time: {}",
                display_number(p.angle()),
                display_number(p.radius()),
                p.time()
            )
        })
    }
}

/// Shortest round-trip form of `value`, printing negative zero as `0`.
fn display_number(value: f64) -> f64 {
    value + 0.0
}

/// Radial axis settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialScale {
    /// Anchor the scale at zero.
    pub begin_at_zero: bool,
    /// Value mapped to the outer ring.
    pub max: f64,
    /// Number of rings drawn between zero and `max`.
    pub ticks: u8,
}

/// Static display configuration of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    /// Radial axis.
    pub scale: RadialScale,
    /// Legend text color.
    pub legend_label_color: Color,
    /// Angle in degrees, clockwise from 12 o'clock, where sector 0 begins.
    pub start_angle: f64,
    /// Follow the size of the terminal.
    pub responsive: bool,
    /// Keep the plot area square instead of filling the panel.
    pub maintain_aspect_ratio: bool,
    /// Padding around the plot, in pixels.
    pub padding: u16,
    /// Plot background.
    pub background_color: Color,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            scale: RadialScale {
                begin_at_zero: true,
                max: 100.0,
                ticks: 5,
            },
            legend_label_color: Color::Black,
            start_angle: 0.0,
            responsive: true,
            maintain_aspect_ratio: false,
            padding: 20,
            background_color: Color::Black,
        }
    }
}

impl ChartOptions {
    /// Lower end of the radial scale for the given values.
    pub fn scale_min(&self, data: &[f64]) -> f64 {
        if self.scale.begin_at_zero {
            0.0
        } else {
            data.iter().copied().fold(self.scale.max, f64::min)
        }
    }

    /// Map a value to a fraction of the outer radius, clamped to `[0, 1]`.
    pub fn normalize(&self, value: f64, min: f64) -> f64 {
        let span = self.scale.max - min;
        if span <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        ((value - min) / span).clamp(0.0, 1.0)
    }
}
