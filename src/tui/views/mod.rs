// Views - screen-level rendering
//
// The whole client is one page (form + list). This module lays out the
// frame shell (title, content, status bar) and stacks the overlays:
// modal first, toast on top.

mod books;
mod overlay;

use crate::tui::app::{App, PageState};
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Main render function, called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let theme = app.theme.clone();

    // Theme background for the entire frame
    let bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg, f.area());

    // A failed initial load replaces the whole page with the raw
    // failure message - no list, no form, no retry.
    if let PageState::Failed(message) = &app.page {
        let error = Paragraph::new(message.clone()).style(Style::default().fg(theme.error_text));
        f.render_widget(error, f.area());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(10),   // page content
            Constraint::Length(2), // status bar
        ])
        .split(f.area());

    components::title_bar::render(f, chunks[0], app, &theme);
    books::render(f, chunks[1], app, &theme);
    components::status_bar::render(f, chunks[2], app, &theme);

    // Modal overlay
    if let Some(modal) = app.modal.take() {
        overlay::render(f, &modal, app, &theme);
        app.modal = Some(modal);
    }

    // Toast renders above everything, including modals
    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &theme);
    }
}
