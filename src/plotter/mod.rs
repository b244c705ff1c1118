//! Plotter view - coordinate entry and the session's coordinate list.
//!
//! The view owns the append-only list of recorded coordinates, the input form,
//! and the selection/animation state of the chart it feeds. Chart data is
//! derived from the list on every draw (see [`crate::chart::ChartData`]).

pub mod form;
pub mod ui;

use chrono::{Local, NaiveDateTime};

use crate::chart::{ChartData, SweepState};
use crate::config::PlotterConfig;
use crate::error::Result;
use form::{Field, InputForm};

/// Timestamp layout for recorded coordinates, e.g. `3/14/2026, 9:05:07 PM`.
const TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// One entered polar coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    angle: f64,
    radius: f64,
    time: String,
}

impl Coordinate {
    /// Angle as entered (no unit is implied).
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Radius as entered, or the default radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Capture time of the record.
    pub fn time(&self) -> &str {
        &self.time
    }
}

/// Ordered, append-only list of coordinates.
#[derive(Debug, Clone, Default)]
pub struct CoordinateList {
    points: Vec<Coordinate>,
}

impl CoordinateList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a coordinate stamped with the current local time.
    pub fn push(&mut self, angle: f64, radius: f64) -> &Coordinate {
        self.push_at(angle, radius, Local::now().naive_local())
    }

    /// Append a coordinate stamped with `at`.
    pub fn push_at(&mut self, angle: f64, radius: f64, at: NaiveDateTime) -> &Coordinate {
        self.points.push(Coordinate {
            angle,
            radius,
            time: at.format(TIME_FORMAT).to_string(),
        });
        &self.points[self.points.len() - 1]
    }

    /// Number of recorded coordinates.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Records in insertion order.
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.points
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.points.iter()
    }
}

/// Which part of the view receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Angle text field.
    #[default]
    Angle,
    /// Radius text field.
    Radius,
    /// Chart point selection.
    Chart,
}

impl Focus {
    /// Next focus target in Tab order.
    pub fn next(self) -> Self {
        match self {
            Focus::Angle => Focus::Radius,
            Focus::Radius => Focus::Chart,
            Focus::Chart => Focus::Angle,
        }
    }

    /// The text field this focus edits, if any.
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Angle => Some(Field::Angle),
            Focus::Radius => Some(Field::Radius),
            Focus::Chart => None,
        }
    }
}

/// State of the plotting view.
#[derive(Debug)]
pub struct PlotterView {
    /// Recorded coordinates for this session.
    pub coordinates: CoordinateList,
    /// Input form.
    pub form: InputForm,
    /// Keyboard focus.
    pub focus: Focus,
    /// Selected point in the derived chart.
    pub selected: usize,
    /// Expanding ring animation.
    pub sweep: SweepState,
    /// Blocking notification, if one is showing.
    pub alert: Option<String>,
    default_radius: f64,
}

impl PlotterView {
    /// Mount a fresh view with an empty coordinate list.
    pub fn new(config: &PlotterConfig) -> Self {
        Self {
            coordinates: CoordinateList::new(),
            form: InputForm::new(),
            focus: Focus::default(),
            selected: 0,
            sweep: SweepState::new(config.sweep_enabled),
            alert: None,
            default_radius: config.default_radius,
        }
    }

    /// Submit the form.
    ///
    /// On success the new coordinate is appended and both fields are cleared.
    /// An invalid angle raises the alert and leaves the list untouched.
    pub fn submit(&mut self) -> Result<&Coordinate> {
        let (angle, radius) = match self.form.parse(self.default_radius) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Rejected angle input {:?}", self.form.text(Field::Angle));
                self.alert = Some(e.to_string());
                return Err(e);
            },
        };

        self.form.clear();
        self.focus = Focus::Angle;
        let point = self.coordinates.push(angle, radius);
        tracing::info!("Added coordinate angle={} radius={}", angle, radius);
        Ok(point)
    }

    /// Derive the chart dataset from the current list.
    pub fn chart_data(&self) -> ChartData<'_> {
        ChartData::derive(self.coordinates.as_slice())
    }

    /// Type a character into the focused field.
    pub fn input(&mut self, c: char) {
        if let Some(field) = self.focus.field() {
            self.form.input(field, c);
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if let Some(field) = self.focus.field() {
            self.form.backspace(field);
        }
    }

    /// Move focus to the next target.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
        tracing::debug!("Focus: {:?}", self.focus);
    }

    /// Select the next chart point.
    pub fn select_next(&mut self) {
        let count = self.chart_data().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    /// Select the previous chart point.
    pub fn select_prev(&mut self) {
        let count = self.chart_data().len();
        if count > 0 {
            self.selected = if self.selected == 0 {
                count - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Selected chart index, if the chart has any points.
    pub fn selected_point(&self) -> Option<usize> {
        let count = self.chart_data().len();
        (count > 0).then(|| self.selected.min(count - 1))
    }

    /// Dismiss the blocking notification.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Advance time-driven state by one tick.
    pub fn tick(&mut self) {
        self.sweep.tick();
    }
}
