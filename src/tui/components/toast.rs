//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a short duration.
//! Renders in the top-right corner on top of all other content, the way
//! the web original parked its transient success popups.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Visual flavor of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
        }
    }
}

/// A toast notification that auto-dismisses
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Two seconds, matching the original popup timer
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    /// Check if the toast should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render in the top-right corner, on top of other content
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let text = format!("{} {}", self.kind.icon(), self.message);

        // Width: text + border + one cell of padding each side
        let width = (text.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;

        let x = area.right().saturating_sub(width + 2);
        let y = area.top() + 1;
        let toast_area = Rect::new(x, y, width, height);

        let accent = match self.kind {
            ToastKind::Success => theme.success,
            ToastKind::Error => theme.danger,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.background));

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        // Clear the area first so the toast appears on top
        f.render_widget(Clear, toast_area);
        f.render_widget(paragraph, toast_area);
    }
}
