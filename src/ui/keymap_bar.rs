//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let keymap_text =
        "q:quit | Tab:switch slider | h/l ←→:step | H/L:step x10 | j/k ↑↓:iterations | r:reset | T:theme | ?:help";

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.keymap_bg));

    f.render_widget(paragraph, area);
}
