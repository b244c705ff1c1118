//! User interface rendering.

mod alert;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use crate::plotter::ui::draw_plotter;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    draw_plotter(f, chunks[0], &app.view, &app.chart_options, &colors);

    status_bar::draw_status(
        f,
        chunks[1],
        &app.status,
        app.view.coordinates.len(),
        &colors,
    );
    keymap_bar::draw_keymap(
        f,
        chunks[2],
        app.view.focus,
        app.view.alert.is_some(),
        &colors,
    );

    if let Some(ref message) = app.view.alert {
        let area = f.area();
        alert::draw_alert(f, area, message, &colors);
    }
}
