// Modal overlay rendering
//
// The confirmation dialog blocks everything until the operator picks a
// side; the logs overlay shows the captured tracing buffer.

use crate::logging::LogLevel;
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::modal::{ConfirmChoice, Modal};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, modal: &Modal, app: &App, theme: &Theme) {
    match modal {
        Modal::ConfirmDelete { name, choice, .. } => {
            render_confirm(f, name, *choice, theme);
        }
        Modal::Logs { scroll } => render_logs(f, app, *scroll, theme),
    }
}

fn render_confirm(f: &mut Frame, name: &str, choice: ConfirmChoice, theme: &Theme) {
    let area = centered(f.area(), 52, 9);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.warning))
        .style(Style::default().bg(theme.background))
        .title(" Anda Yakin ? ");
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let warning = Paragraph::new("Data yang dihapus tidak bisa dikembalikan!")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.foreground));
    f.render_widget(warning, rows[0]);

    let target = Paragraph::new(format!("\u{201c}{name}\u{201d}"))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(target, rows[1]);

    let buttons = Line::from(vec![
        styled_button("Ya, hapus!", theme.danger, choice == ConfirmChoice::Confirm, theme),
        Span::raw("   "),
        styled_button("Batal", theme.primary, choice == ConfirmChoice::Cancel, theme),
    ]);
    f.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Center),
        rows[3],
    );
}

fn styled_button(
    label: &str,
    accent: ratatui::style::Color,
    selected: bool,
    theme: &Theme,
) -> Span<'static> {
    let style = if selected {
        Style::default()
            .bg(accent)
            .fg(theme.background)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent)
    };
    Span::styled(format!(" {label} "), style)
}

fn render_logs(f: &mut Frame, app: &App, scroll: usize, theme: &Theme) {
    let frame_area = f.area();
    let area = centered(
        frame_area,
        frame_area.width.saturating_sub(8).max(40),
        frame_area.height.saturating_sub(4).max(10),
    );

    let entries = app.log_buffer.entries();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.background))
        .title(format!(" Logs ({}) ", entries.len()));
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let height = inner.height as usize;
    // Newest entries at the bottom; scroll moves back in time
    let end = entries.len().saturating_sub(scroll);
    let start = end.saturating_sub(height);

    let lines: Vec<Line> = entries[start..end]
        .iter()
        .map(|entry| {
            let color = match entry.level {
                LogLevel::Error => theme.danger,
                LogLevel::Warn => theme.warning,
                LogLevel::Info => theme.foreground,
                LogLevel::Debug | LogLevel::Trace => theme.placeholder,
            };
            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(theme.placeholder),
                ),
                Span::styled(format!("{:5} ", entry.level.as_str()), Style::default().fg(color)),
                Span::styled(
                    format!("{} ", entry.target),
                    Style::default().fg(theme.placeholder),
                ),
                Span::styled(entry.message.clone(), Style::default().fg(color)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

/// Center a box of the given size inside `area`, clamped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
