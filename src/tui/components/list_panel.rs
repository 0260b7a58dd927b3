// List panel - one row per book
//
// Shows the 1-based index, name and price of every record. The selected
// row carries the Edit/Delete actions; both only delegate back to the
// controller. Renders nothing but the frame for an empty collection.

use super::button::{self, ButtonVariant};
use crate::theme::Theme;
use crate::tui::app::{App, FocusedPanel, PageState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App, theme: &Theme) {
    let focused = app.focused == FocusedPanel::List;
    let border = if focused {
        theme.border_focused
    } else {
        theme.border
    };

    let title = format!(" Books ({}) ", app.books.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border))
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.page == PageState::Loading {
        let loading = Paragraph::new("Loading…").style(Style::default().fg(theme.placeholder));
        f.render_widget(loading, inner);
        return;
    }

    let (start, end) = app.visible_range(inner.height as usize);
    let mut lines: Vec<Line> = Vec::with_capacity(end - start);

    for (index, book) in app.books[start..end].iter().enumerate() {
        let absolute = start + index;
        let selected = absolute == app.selected;

        let mut spans = vec![
            Span::raw(format!(" {} ", absolute + 1)),
            Span::styled(
                book.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | Rp. {}", format_price(book.price))),
        ];

        if selected && focused {
            spans.push(Span::raw("  "));
            spans.push(button::inline("Edit", ButtonVariant::Primary, theme));
            spans.push(Span::raw(" "));
            spans.push(button::inline("Delete", ButtonVariant::Danger, theme));
        }

        let line = if selected {
            Line::from(spans).style(
                Style::default()
                    .bg(theme.selection)
                    .fg(theme.selection_fg),
            )
        } else {
            Line::from(spans).style(Style::default().fg(theme.foreground))
        };
        lines.push(line);
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Wire prices are floats; whole amounts print without the ".0"
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        format!("{price}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_prices_drop_the_fraction() {
        assert_eq!(format_price(85000.0), "85000");
        assert_eq!(format_price(12.5), "12.5");
    }
}
