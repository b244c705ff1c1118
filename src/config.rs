//! Runtime configuration.

use crate::app::Theme;
use std::time::Duration;

/// Radius substituted when the radius field is left empty.
pub const DEFAULT_RADIUS: f64 = 100.0;

/// Settings collected from the command line.
#[derive(Debug, Clone)]
pub struct PlotterConfig {
    /// Radius used when none is entered.
    pub default_radius: f64,
    /// Event poll interval; also drives the sweep animation.
    pub tick_rate: Duration,
    /// Initial theme.
    pub theme: Theme,
    /// Whether the sweep ring animates.
    pub sweep_enabled: bool,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            default_radius: DEFAULT_RADIUS,
            tick_rate: Duration::from_millis(100),
            theme: Theme::GruvboxDark,
            sweep_enabled: true,
        }
    }
}

impl PlotterConfig {
    /// Override the tick rate in milliseconds.
    pub fn with_tick_rate_ms(mut self, ms: u64) -> Self {
        self.tick_rate = Duration::from_millis(ms);
        self
    }

    /// Override the initial theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable the sweep animation.
    pub fn with_sweep(mut self, enabled: bool) -> Self {
        self.sweep_enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PlotterConfig::default();
        assert_eq!(config.default_radius, 100.0);
        assert_eq!(config.tick_rate, Duration::from_millis(100));
        assert!(config.sweep_enabled);
    }

    #[test]
    fn builders_override() {
        let config = PlotterConfig::default()
            .with_tick_rate_ms(40)
            .with_theme(Theme::GruvboxLight)
            .with_sweep(false);
        assert_eq!(config.tick_rate, Duration::from_millis(40));
        assert_eq!(config.theme, Theme::GruvboxLight);
        assert!(!config.sweep_enabled);
    }
}
