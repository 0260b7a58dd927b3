// Status bar component
//
// Key hints for the focused panel plus the form mode, so the operator
// always knows whether Enter will create or update.

use crate::form::FormMode;
use crate::theme::Theme;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mode = match app.form.mode {
        FormMode::Create => "mode: create".to_string(),
        FormMode::Edit(id) => format!("mode: edit #{id}"),
    };

    let hints = match app.focused {
        FocusedPanel::Form => {
            if Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) {
                "Tab list · ↑/↓ field · Enter submit · Esc clear · Ctrl+C quit"
            } else {
                "Tab · ↑/↓ · Enter · Esc"
            }
        }
        FocusedPanel::List => {
            if Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) {
                "Tab form · ↑/↓ move · Enter/e edit · d delete · n new · L logs · t theme · q quit"
            } else {
                "Tab · ↑/↓ · e · d · n · L · q"
            }
        }
    };

    let status = Paragraph::new(format!(" {mode} │ {hints}"))
        .style(Style::default().fg(theme.status_bar))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );

    f.render_widget(status, area);
}
