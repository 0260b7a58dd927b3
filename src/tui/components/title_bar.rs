// Title bar component
//
// Renders the page header with the backend the client is talking to.

use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let title = Paragraph::new(format!(" 📚 Books · {}", app.backend_label))
        .style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.title))
                .title_top(Line::from(" bookdesk ").right_aligned()),
        );

    f.render_widget(title, area);
}
