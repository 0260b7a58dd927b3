// The books page: form and list
//
// Side by side on wide terminals, stacked otherwise. The form gets its
// fixed content height; the list takes the rest.

use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::components::{form_panel, list_panel};
use crate::tui::layout::Breakpoint;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, app: &mut App, theme: &Theme) {
    let (form_area, list_area) = split(area);
    form_panel::render(f, form_area, app, theme);
    list_panel::render(f, list_area, app, theme);
}

fn split(area: Rect) -> (Rect, Rect) {
    if Breakpoint::from_width(area.width).at_least(Breakpoint::Wide) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        (columns[0], columns[1])
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(form_panel::CONTENT_HEIGHT + 2),
                Constraint::Min(4),
            ])
            .split(area);
        (rows[0], rows[1])
    }
}
