// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return
// actions. App just holds Option<Modal>; input routing acts on the
// returned ModalAction.

use crate::model::BookId;
use crossterm::event::KeyCode;

/// Which button the confirmation dialog currently highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Confirm,
    Cancel,
}

impl ConfirmChoice {
    fn other(self) -> Self {
        match self {
            ConfirmChoice::Confirm => ConfirmChoice::Cancel,
            ConfirmChoice::Cancel => ConfirmChoice::Confirm,
        }
    }
}

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Operator confirmed the destructive action
    Confirm,
    /// Operator backed out; nothing must happen
    Cancel,
    /// Close the modal without a verdict (logs overlay)
    Close,
}

/// Available modal types
#[derive(Debug, Clone)]
pub enum Modal {
    /// Blocking delete confirmation. Nothing is issued until the
    /// operator picks a side.
    ConfirmDelete {
        id: BookId,
        name: String,
        choice: ConfirmChoice,
    },
    /// Scrollable view of the captured log buffer
    Logs { scroll: usize },
}

impl Modal {
    /// Confirmation starts on Cancel so a stray Enter destroys nothing
    pub fn confirm_delete(id: BookId, name: String) -> Self {
        Modal::ConfirmDelete {
            id,
            name,
            choice: ConfirmChoice::Cancel,
        }
    }

    pub fn logs() -> Self {
        Modal::Logs { scroll: 0 }
    }

    /// Handle keyboard input, return the action for the caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::ConfirmDelete { choice, .. } => match key {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::Char('h')
                | KeyCode::Char('l') => {
                    *choice = choice.other();
                    ModalAction::None
                }
                KeyCode::Enter => match choice {
                    ConfirmChoice::Confirm => ModalAction::Confirm,
                    ConfirmChoice::Cancel => ModalAction::Cancel,
                },
                KeyCode::Char('y') | KeyCode::Char('Y') => ModalAction::Confirm,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ModalAction::Cancel,
                _ => ModalAction::None,
            },
            Modal::Logs { scroll } => match key {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('L') => ModalAction::Close,
                KeyCode::Up | KeyCode::Char('k') => {
                    *scroll = scroll.saturating_sub(1);
                    ModalAction::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    *scroll += 1;
                    ModalAction::None
                }
                KeyCode::PageUp => {
                    *scroll = scroll.saturating_sub(10);
                    ModalAction::None
                }
                KeyCode::PageDown => {
                    *scroll += 10;
                    ModalAction::None
                }
                KeyCode::Home => {
                    *scroll = 0;
                    ModalAction::None
                }
                _ => ModalAction::None,
            },
        }
    }
}
