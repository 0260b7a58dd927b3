// Labeled text input component
//
// Renders one bordered field with its label as the block title, a
// placeholder when empty, and the field's own error text underneath.
// The caller owns the value and cursor; this component only draws.

use crate::form::validate::Field;
use crate::form::FormState;
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Render one form field: 3 rows of bordered input + 1 row of error text
pub fn render(
    f: &mut Frame,
    area: Rect,
    form: &FormState,
    field: Field,
    focused: bool,
    theme: &Theme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border = if focused {
        theme.border_focused
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", field.label()));

    let value = form.value(field);
    let inner_width = rows[0].width.saturating_sub(2) as usize;

    let paragraph = if value.is_empty() {
        Paragraph::new(field.placeholder()).style(Style::default().fg(theme.placeholder))
    } else {
        let (window, _) = visible_window(value, form.cursor(), inner_width);
        Paragraph::new(window).style(Style::default().fg(theme.foreground))
    };
    f.render_widget(paragraph.block(block), rows[0]);

    // Hardware cursor in the focused field
    if focused {
        let (_, cursor_col) = visible_window(value, form.cursor(), inner_width);
        f.set_cursor_position((rows[0].x + 1 + cursor_col as u16, rows[0].y + 1));
    }

    // The field's own error only - never another field's (and never the
    // mere existence of errors elsewhere)
    if let Some(error) = form.error(field) {
        let label = Paragraph::new(error).style(Style::default().fg(theme.error_text));
        f.render_widget(label, rows[1]);
    }
}

/// Scroll the value horizontally so the cursor stays visible.
/// Returns the visible slice and the cursor's display column within it.
fn visible_window(value: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }

    let chars: Vec<char> = value.chars().collect();
    let cursor = cursor.min(chars.len());

    // Walk back from the cursor until the window is full
    let mut start = cursor;
    let mut used = 1; // reserve a column for the cursor itself
    while start > 0 {
        let w = chars[start - 1].width().unwrap_or(1);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }

    // Extend forward with whatever still fits
    let mut end = cursor;
    while end < chars.len() {
        let w = chars[end].width().unwrap_or(1);
        if used + w > width {
            break;
        }
        used += w;
        end += 1;
    }

    let window: String = chars[start..end].iter().collect();
    let cursor_col = chars[start..cursor]
        .iter()
        .map(|c| c.width().unwrap_or(1))
        .sum();
    (window, cursor_col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_value_is_shown_whole() {
        let (window, col) = visible_window("buku", 4, 20);
        assert_eq!(window, "buku");
        assert_eq!(col, 4);
    }

    #[test]
    fn long_value_scrolls_to_keep_cursor_visible() {
        let value = "abcdefghij";
        let (window, col) = visible_window(value, 10, 5);
        assert_eq!(window, "ghij");
        assert_eq!(col, 4);
    }

    #[test]
    fn cursor_mid_value_keeps_context_on_both_sides() {
        let value = "abcdefghij";
        let (window, col) = visible_window(value, 5, 6);
        assert!(window.contains('e'));
        assert!(col < 6);
    }
}
