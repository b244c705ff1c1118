//! Keymap help bar UI component.

use crate::plotter::Focus;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(
    f: &mut Frame<'_>,
    area: Rect,
    focus: Focus,
    alert_visible: bool,
    colors: &ThemeColors,
) {
    let keymap_text = if alert_visible {
        "Enter/Esc:dismiss"
    } else {
        match focus {
            Focus::Angle | Focus::Radius => {
                "0-9.-e:type | Backspace:delete | Enter:add | Tab:next field | Esc:quit"
            },
            Focus::Chart => {
                "←→/hl:select | y:copy point | c:copy all | s:sweep | T:theme | Tab:form | q:quit"
            },
        }
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
