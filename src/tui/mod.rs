// TUI module - Terminal User Interface
//
// Handles terminal initialization and cleanup, the event loop (keyboard
// input, timer ticks, API events), and rendering. All state lives in
// `App`; network effects go out through the command channel.

pub mod app;
pub mod components;
pub mod layout;
pub mod modal;
pub mod views;

use crate::config::Config;
use crate::events::{BookCommand, BookEvent};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, FocusedPanel, PageState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop until quit, and restores
/// the terminal afterwards even when the loop errors.
pub async fn run_tui(
    config: &Config,
    log_buffer: LogBuffer,
    command_tx: mpsc::Sender<BookCommand>,
    mut event_rx: mpsc::Receiver<BookEvent>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, log_buffer, command_tx);
    app.start();

    let result = run_event_loop(&mut terminal, &mut app, &mut event_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources at once: keyboard input, a periodic redraw
/// tick, and events coming back from the API worker.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::Receiver<BookEvent>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick (toast expiry, redraw)
            _ = tick_interval.tick() => {
                app.tick();
            }

            // API worker events
            Some(book_event) = event_rx.recv() => {
                app.apply_event(book_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Layered key dispatch: Modal -> Global -> Focused panel
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Layer 1: a modal captures all input while open
    if let Some(modal) = app.modal.as_mut() {
        match modal.handle_input(key.code) {
            ModalAction::None => {}
            ModalAction::Confirm => app.resolve_confirm(true),
            ModalAction::Cancel => app.resolve_confirm(false),
            ModalAction::Close => app.close_modal(),
        }
        return;
    }

    // Layer 2: global keys
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        app.should_quit = true;
        return;
    }

    // A failed page only renders the error text; any dismissal key quits
    if matches!(app.page, PageState::Failed(_)) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) {
            app.should_quit = true;
        }
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.focus_toggle();
        return;
    }

    // Layer 3: focused panel
    match app.focused {
        FocusedPanel::Form => handle_form_key(app, key),
        FocusedPanel::List => handle_list_key(app, key),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Up => app.form.focus_prev(),
        KeyCode::Down => app.form.focus_next(),
        KeyCode::Left => app.form.cursor_left(),
        KeyCode::Right => app.form.cursor_right(),
        KeyCode::Home => app.form.cursor_home(),
        KeyCode::End => app.form.cursor_end(),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Delete => app.form.delete(),
        KeyCode::Char(c) => app.form.insert_char(c),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter | KeyCode::Char('e') => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_selected(),
        KeyCode::Char('n') => {
            app.cancel_edit();
            app.focused = FocusedPanel::Form;
        }
        KeyCode::Char('L') => app.open_logs(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}
