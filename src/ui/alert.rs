//! Blocking notification popup.

use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const DISMISS_HINT: &str = "Press Enter to continue";

/// Draw the alert centered over `area`.
pub(super) fn draw_alert(f: &mut Frame<'_>, area: Rect, message: &str, colors: &ThemeColors) {
    let popup = popup_rect(message, area);

    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Alert ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.error))
        .style(Style::default().bg(colors.bg));

    let lines = vec![
        Line::from(Span::styled(
            message,
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(DISMISS_HINT, Style::default().fg(colors.border))),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup);
}

/// Popup sized to its text, centered in `area`.
fn popup_rect(message: &str, area: Rect) -> Rect {
    let text_width = message.width().max(DISMISS_HINT.width()) as u16;
    let width = (text_width + 6).min(area.width);
    let height = 5u16.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
