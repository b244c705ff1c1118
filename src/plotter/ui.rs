//! Plotter view rendering - input form on top, chart below.

use super::form::Field;
use super::PlotterView;
use crate::chart::{self, ChartOptions};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Height of the form panel.
pub const FORM_HEIGHT: u16 = 5;

/// Draw the whole view into `area`.
pub fn draw_plotter(
    f: &mut Frame<'_>,
    area: Rect,
    view: &PlotterView,
    options: &ChartOptions,
    colors: &ThemeColors,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(5)])
        .split(area);

    draw_form(f, chunks[0], view, colors);
    chart::ui::draw_chart(f, chunks[1], view, options, colors);
}

fn draw_form(f: &mut Frame<'_>, area: Rect, view: &PlotterView, colors: &ThemeColors) {
    let block = Block::default()
        .title(Span::styled(
            " Polar Coordinate Plotter ",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ])
        .split(inner);

    draw_field(f, columns[0], view, Field::Angle, colors);
    draw_field(f, columns[1], view, Field::Radius, colors);
    draw_button(f, columns[2], view, colors);
}

fn draw_field(
    f: &mut Frame<'_>,
    area: Rect,
    view: &PlotterView,
    field: Field,
    colors: &ThemeColors,
) {
    let focused = view.focus.field() == Some(field);
    let text = view.form.text(field);

    let border = if focused { colors.heading } else { colors.border };
    let title = match field {
        Field::Angle => " Angle (θ) ",
        Field::Radius => " Radius (r) ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let content = if text.is_empty() {
        Line::from(Span::styled(
            field.placeholder(),
            Style::default().fg(colors.border),
        ))
    } else {
        Line::from(Span::styled(text, Style::default().fg(colors.value)))
    };

    let inner = block.inner(area);
    f.render_widget(Paragraph::new(content).block(block), area);

    if focused && view.alert.is_none() && inner.width > 0 {
        let offset = (text.width() as u16).min(inner.width - 1);
        f.set_cursor_position(Position::new(inner.x + offset, inner.y));
    }
}

fn draw_button(f: &mut Frame<'_>, area: Rect, view: &PlotterView, colors: &ThemeColors) {
    let style = if view.focus.field().is_some() {
        Style::default().fg(colors.cursor_fg).bg(colors.cursor_bg)
    } else {
        Style::default().fg(colors.text)
    };
    let button = Paragraph::new(Line::from(Span::styled(" Add Coordinate ⏎ ", style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        );

    f.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use crate::config::PlotterConfig;
    use crate::plotter::Focus;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(view: &PlotterView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let colors = ThemeColors::from_theme(&Theme::GruvboxDark);
        terminal
            .draw(|f| {
                let area = f.area();
                draw_plotter(f, area, view, &ChartOptions::default(), &colors);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn empty_view_shows_placeholders() {
        let view = PlotterView::new(&PlotterConfig::default());
        let screen = render(&view);
        assert!(screen.contains("Polar Coordinate Plotter"));
        assert!(screen.contains("Enter Angle (θ)"));
        assert!(screen.contains("Enter Radius (r) - Optional"));
        assert!(screen.contains("Polar Coordinates"));
        assert!(screen.contains("No points charted yet"));
    }

    #[test]
    fn selected_point_tooltip_is_shown() {
        let mut view = PlotterView::new(&PlotterConfig::default().with_sweep(false));
        view.coordinates.push(10.0, 10.0);
        view.coordinates.push(45.0, 80.0);
        view.focus = Focus::Chart;
        let screen = render(&view);
        assert!(screen.contains("Point 1: Angle: 45, Radius: 80, Time:"));
        assert!(!screen.contains("No points charted yet"));
    }

    #[test]
    fn typed_text_replaces_placeholder() {
        let mut view = PlotterView::new(&PlotterConfig::default());
        view.input('1');
        view.input('5');
        let screen = render(&view);
        assert!(screen.contains("15"));
        assert!(!screen.contains("Enter Angle (θ)"));
    }
}
