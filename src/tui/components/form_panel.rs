// Form panel - the create/update surface
//
// Three labeled inputs plus the submit button. The button label follows
// the controller's mode (Submit vs Update) and its enabled state is the
// valid-AND-dirty gate; this panel performs no validation of its own.

use super::{button, text_input};
use crate::form::validate::Field;
use crate::theme::Theme;
use crate::tui::app::{App, FocusedPanel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

/// Rows inside the panel: 3 fields of 4 rows each, 3 for the button
pub const CONTENT_HEIGHT: u16 = 3 * 4 + 3;

pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let focused_panel = app.focused == FocusedPanel::Form;
    let border = if focused_panel {
        theme.border_focused
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border))
        .title(" Form ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    for (i, field) in [Field::Name, Field::Description, Field::Price]
        .into_iter()
        .enumerate()
    {
        let field_focused = focused_panel && app.form.focused == field;
        text_input::render(f, rows[i], &app.form, field, field_focused, theme);
    }

    // Submit button: primary variant, width to fit the longer label
    let button_area = Rect {
        width: rows[3].width.min(14),
        ..rows[3]
    };
    button::render(
        f,
        button_area,
        app.form.submit_label(),
        button::ButtonVariant::Primary,
        app.form.can_submit(),
        theme,
    );
}
