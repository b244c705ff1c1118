//! Polar Plotter - a terminal polar coordinate plotter.
//!
//! Enter an angle and an optional radius, press Enter, and the recorded
//! coordinates are drawn as a polar-area chart: one equal-width sector per
//! point, sized by its radius.
//!
//! # Features
//!
//! - Two-field numeric input form with a blocking alert for invalid angles
//! - Polar-area chart on a braille canvas with radial scale rings
//! - Per-point tooltips with the entered angle, radius and capture time
//! - Expanding sweep ring animation
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```
//! use polar_plotter::chart::ChartData;
//! use polar_plotter::plotter::CoordinateList;
//!
//! let mut list = CoordinateList::new();
//! list.push(30.0, 50.0);
//! list.push(60.0, 100.0);
//!
//! // The first recorded coordinate is not charted.
//! let chart = ChartData::derive(list.as_slice());
//! assert_eq!(chart.labels(), vec!["Point 1"]);
//! assert_eq!(chart.dataset().data, vec![100.0]);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod plotter;
pub mod ui;
pub mod util;

pub use error::{PlotterError, Result};
