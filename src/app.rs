//! Application state and logic.
//!
//! [`App`] is the shell around the single plotter view: it mounts the view,
//! routes key events to it, and keeps the status line and theme.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::chart::ChartOptions;
use crate::config::PlotterConfig;
use crate::plotter::{Focus, PlotterView};
use crate::util;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The mounted plotter view.
    pub view: PlotterView,
    /// Chart display options.
    pub chart_options: ChartOptions,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Set once the user asked to leave.
    pub should_quit: bool,
}

impl App {
    /// Create the shell and mount a fresh plotter view.
    pub fn new(config: &PlotterConfig) -> Self {
        tracing::debug!("Mounting plotter view");
        Self {
            view: PlotterView::new(config),
            chart_options: ChartOptions::default(),
            status: "Ready".to_string(),
            theme: config.theme,
            should_quit: false,
        }
    }

    /// Advance animations by one tick.
    pub fn on_tick(&mut self) {
        self.view.tick();
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // The alert blocks everything else until dismissed
        if self.view.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.view.dismiss_alert();
                self.status = "Ready".to_string();
            }
            return;
        }

        if key.code == KeyCode::Tab {
            self.view.cycle_focus();
            return;
        }

        match self.view.focus {
            Focus::Angle | Focus::Radius => self.handle_form_key(key),
            Focus::Chart => self.handle_chart_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.add_coordinate(),
            KeyCode::Backspace => self.view.backspace(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.view.input(c),
            _ => {},
        }
    }

    fn handle_chart_key(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::NONE, KeyCode::Esc) => {
                self.should_quit = true;
            },

            // Point selection
            (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                self.view.select_prev();
            },
            (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                self.view.select_next();
            },

            // Back to the form
            (KeyModifiers::NONE, KeyCode::Enter) => {
                self.view.focus = Focus::Angle;
            },

            // Features
            (KeyModifiers::NONE, KeyCode::Char('s')) => {
                let on = self.view.sweep.toggle();
                self.status = format!("Sweep: {}", if on { "ON" } else { "OFF" });
            },
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                self.cycle_theme();
            },

            // Clipboard
            (KeyModifiers::NONE, KeyCode::Char('y')) => self.copy_selected_point(),
            (KeyModifiers::NONE, KeyCode::Char('c')) => self.copy_all_coordinates(),

            _ => {},
        }
    }

    /// Submit the form and report the outcome on the status line.
    pub fn add_coordinate(&mut self) {
        self.status = match self.view.submit() {
            Ok(point) => format!(
                "Added angle {} radius {}",
                point.angle(),
                point.radius()
            ),
            Err(e) => e.to_string(),
        };
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    fn copy_selected_point(&mut self) {
        let chart = self.view.chart_data();
        let result = match self.view.selected_point() {
            Some(index) => util::copy_point_info(&chart, index).map(|_| index),
            None => {
                self.status = "No point selected".to_string();
                return;
            },
        };
        self.status = match result {
            Ok(index) => format!("Copied Point {}!", index + 1),
            Err(e) => {
                tracing::error!("Copy failed: {}", e);
                format!("Copy failed: {}", e)
            },
        };
    }

    fn copy_all_coordinates(&mut self) {
        self.status = match util::copy_coordinate_table(self.view.coordinates.as_slice()) {
            Ok(count) => format!("Copied {} coordinates!", count),
            Err(e) => {
                tracing::error!("Copy failed: {}", e);
                format!("Copy failed: {}", e)
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app() -> App {
        App::new(&PlotterConfig::default())
    }

    #[test]
    fn enter_adds_coordinate() {
        let mut app = app();
        type_str(&mut app, "30");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "50");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.view.coordinates.len(), 1);
        assert_eq!(app.view.focus, Focus::Angle);
        assert_eq!(app.status, "Added angle 30 radius 50");
    }

    #[test]
    fn invalid_angle_blocks_until_dismissed() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view.coordinates.len(), 0);
        assert_eq!(app.view.alert.as_deref(), Some("Please enter a valid angle"));

        // Typing is swallowed while the alert is up
        type_str(&mut app, "12");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view.form.text(crate::plotter::form::Field::Angle), "");
        assert_eq!(app.view.focus, Focus::Angle);

        press(&mut app, KeyCode::Enter);
        assert!(app.view.alert.is_none());
        assert_eq!(app.view.coordinates.len(), 0);
    }

    #[test]
    fn ctrl_c_quits_while_alert_is_showing() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.view.alert.is_some());

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn letters_do_not_reach_fields() {
        let mut app = app();
        type_str(&mut app, "q4h5");
        assert!(!app.should_quit);
        assert_eq!(app.view.form.text(crate::plotter::form::Field::Angle), "45");
    }

    #[test]
    fn chart_keys() {
        let mut app = app();
        for angle in ["1", "2", "3"] {
            type_str(&mut app, angle);
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view.focus, Focus::Chart);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.view.selected_point(), Some(1));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.view.selected_point(), Some(0));

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.status, "Sweep: OFF");

        app.handle_key(KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT));
        assert_eq!(app.theme, Theme::GruvboxLight);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn copy_without_points_reports_status() {
        let mut app = app();
        app.view.focus = Focus::Chart;
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.status, "No point selected");
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.status, "Copy failed: Nothing to copy: no coordinates recorded");
    }

    #[test]
    fn ctrl_c_quits_from_form() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.view.form.text(crate::plotter::form::Field::Angle).is_empty());
    }

    #[test]
    fn theme_cycles() {
        assert_eq!(Theme::GruvboxDark.next(), Theme::GruvboxLight);
        assert_eq!(Theme::GruvboxLight.next().name(), "Gruvbox Dark");
    }
}
