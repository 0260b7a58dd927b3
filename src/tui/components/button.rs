// Button component
//
// A styled action label. Enabled/disabled rendering is purely a function
// of the `enabled` flag passed in - the button holds no state and
// triggers nothing itself.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Visual variants, defaulting to the indigo "primary"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Danger,
    Warning,
    Success,
}

impl ButtonVariant {
    pub fn color(self, theme: &Theme) -> Color {
        match self {
            ButtonVariant::Primary => theme.primary,
            ButtonVariant::Danger => theme.danger,
            ButtonVariant::Warning => theme.warning,
            ButtonVariant::Success => theme.success,
        }
    }
}

/// Render a button. Disabled buttons go grey regardless of variant.
pub fn render(
    f: &mut Frame,
    area: Rect,
    label: &str,
    variant: ButtonVariant,
    enabled: bool,
    theme: &Theme,
) {
    let fill = if enabled {
        variant.color(theme)
    } else {
        theme.disabled
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(fill));

    let style = if enabled {
        Style::default().fg(fill).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.disabled)
    };

    let paragraph = Paragraph::new(Span::styled(label.to_string(), style))
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(paragraph, area);
}

/// Inline button text for places without room for a bordered box
/// (the list rows' Edit/Delete actions)
pub fn inline(label: &str, variant: ButtonVariant, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!("[{label}]"),
        Style::default()
            .fg(variant.color(theme))
            .add_modifier(Modifier::BOLD),
    )
}
