// TUI application state - the page controller
//
// Owns the in-memory book list, the form, focus, and the modal/toast
// overlays. Network effects leave through the command channel and come
// back as `BookEvent`s; everything here is plain state, so the full
// create/update/delete flow is testable without a terminal.

use super::components::toast::{Toast, ToastKind};
use super::modal::Modal;
use crate::config::Config;
use crate::events::{BookCommand, BookEvent};
use crate::form::{FormMode, FormState};
use crate::logging::LogBuffer;
use crate::model::{self, Book, BookId};
use crate::theme::Theme;
use tokio::sync::mpsc;

/// Lifecycle of the initial collection fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    Loading,
    Ready,
    /// The page renders this raw message in place of all normal content
    Failed(String),
}

/// Which panel receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPanel {
    Form,
    List,
}

/// Main application state for the TUI
pub struct App {
    /// The in-memory mirror of the remote collection. May diverge from
    /// the server only for the duration of one outstanding request.
    pub books: Vec<Book>,

    pub page: PageState,

    pub form: FormState,

    pub focused: FocusedPanel,

    /// Index of the selected list row
    pub selected: usize,

    /// Scroll offset for the list viewport
    pub list_offset: usize,

    /// Active overlay; captures all input while present
    pub modal: Option<Modal>,

    /// Transient notification; auto-dismisses
    pub toast: Option<Toast>,

    pub log_buffer: LogBuffer,

    pub theme: Theme,

    /// Shown in the title bar: "demo" or the API base URL
    pub backend_label: String,

    pub should_quit: bool,

    commands: mpsc::Sender<BookCommand>,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer, commands: mpsc::Sender<BookCommand>) -> Self {
        Self {
            books: Vec::new(),
            page: PageState::Loading,
            form: FormState::new(config.messages.clone()),
            focused: FocusedPanel::Form,
            selected: 0,
            list_offset: 0,
            modal: None,
            toast: None,
            log_buffer,
            theme: Theme::from_name(&config.theme),
            backend_label: if config.demo {
                "demo".to_string()
            } else {
                config.api_url.clone()
            },
            should_quit: false,
            commands,
        }
    }

    /// Kick off the initial fetch. Called once before the event loop.
    pub fn start(&mut self) {
        self.page = PageState::Loading;
        self.send(BookCommand::LoadAll);
    }

    /// Enqueue a command for the API worker.
    ///
    /// Nothing disables the UI while a request is in flight (beyond the
    /// initial-load gate), so a full queue just drops the extra command
    /// with a warning - the worker is strictly sequential anyway.
    fn send(&mut self, command: BookCommand) {
        if let Err(e) = self.commands.try_send(command) {
            tracing::warn!("Command queue full, dropping: {e}");
        }
    }

    // ─── Event application (list reconciliation) ─────────────

    /// Apply a worker event to controller state
    pub fn apply_event(&mut self, event: BookEvent) {
        match event {
            BookEvent::Loaded(books) => {
                self.books = books;
                self.page = PageState::Ready;
                self.clamp_selection();
            }
            BookEvent::LoadFailed(message) => {
                self.page = PageState::Failed(message);
            }
            BookEvent::Fetched(book) => {
                self.form.populate(&book);
                self.focused = FocusedPanel::Form;
            }
            BookEvent::FetchFailed(message) => {
                self.notify(ToastKind::Error, message);
            }
            BookEvent::Created(book) => {
                self.books.push(book);
                self.notify(ToastKind::Success, "Berhasil menyimpan data!");
                self.form.reset();
            }
            BookEvent::Updated(book) => {
                if !model::replace_book(&mut self.books, book) {
                    tracing::warn!("Update reconciliation found no matching row");
                }
                self.notify(ToastKind::Success, "Berhasil mengupdate data!");
                self.form.reset();
            }
            BookEvent::SaveFailed(message) => {
                // Form is NOT reset - the operator's input survives for retry
                self.notify(ToastKind::Error, message);
            }
            BookEvent::Deleted(id) => {
                model::remove_book(&mut self.books, id);
                self.clamp_selection();
                // Acknowledged only here, after the server confirmed
                self.notify(ToastKind::Success, "Data sudah dihapus.");
            }
            BookEvent::DeleteFailed(message) => {
                self.notify(ToastKind::Error, message);
            }
        }
    }

    // ─── Form handlers ───────────────────────────────────────

    /// Submit the form: create in create mode, full replace in edit mode.
    /// A no-op unless the form is both valid and modified.
    pub fn submit(&mut self) {
        if !self.form.can_submit() {
            return;
        }
        let Some(draft) = self.form.draft() else {
            return;
        };
        match self.form.mode {
            FormMode::Create => self.send(BookCommand::Create(draft)),
            FormMode::Edit(id) => self.send(BookCommand::Update(id, draft)),
        }
    }

    /// Fetch one record to populate the form (the list's Edit action)
    pub fn edit_book(&mut self, id: BookId) {
        self.send(BookCommand::Fetch(id));
    }

    pub fn edit_selected(&mut self) {
        if let Some(id) = self.selected_book().map(|b| b.id) {
            self.edit_book(id);
        }
    }

    /// Clear the form back to create mode without touching the list
    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }

    // ─── Delete flow ─────────────────────────────────────────

    /// Open the confirmation dialog for the selected row.
    /// No command is issued until the operator confirms.
    pub fn request_delete_selected(&mut self) {
        let Some(book) = self.selected_book() else {
            return;
        };
        let (id, name) = (book.id, book.name.clone());
        self.modal = Some(Modal::confirm_delete(id, name));
    }

    /// Resolve the confirmation dialog. Confirming issues exactly one
    /// DELETE; cancelling does nothing at all.
    pub fn resolve_confirm(&mut self, confirmed: bool) {
        let Some(Modal::ConfirmDelete { id, .. }) = self.modal.take() else {
            return;
        };
        if confirmed {
            self.send(BookCommand::Delete(id));
        }
    }

    // ─── Overlays ────────────────────────────────────────────

    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast::new(kind, message));
    }

    pub fn open_logs(&mut self) {
        self.modal = Some(Modal::logs());
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Periodic tick: expire the toast
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    // ─── List navigation ─────────────────────────────────────

    pub fn selected_book(&self) -> Option<&Book> {
        self.books.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.books.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.books.len() {
            self.selected = self.books.len().saturating_sub(1);
        }
    }

    /// Toggle focus between the form and the list
    pub fn focus_toggle(&mut self) {
        self.focused = match self.focused {
            FocusedPanel::Form => FocusedPanel::List,
            FocusedPanel::List => FocusedPanel::Form,
        };
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme.name {
            "dark" => Theme::light(),
            _ => Theme::dark(),
        };
    }

    /// Visible row range for the list given the viewport height,
    /// keeping the selected row in view
    pub fn visible_range(&mut self, height: usize) -> (usize, usize) {
        let total = self.books.len();
        if total == 0 || height == 0 {
            return (0, 0);
        }

        if self.selected >= self.list_offset + height {
            self.list_offset = self.selected + 1 - height;
        } else if self.selected < self.list_offset {
            self.list_offset = self.selected;
        }

        let start = self.list_offset;
        let end = (start + height).min(total);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validate::Field;

    fn app_with_rx() -> (App, mpsc::Receiver<BookCommand>) {
        let (tx, rx) = mpsc::channel(16);
        let app = App::new(&Config::default(), LogBuffer::new(), tx);
        (app, rx)
    }

    fn book(id: BookId, name: &str) -> Book {
        Book {
            id,
            name: name.to_string(),
            description: "deskripsi yang cukup panjang".into(),
            price: 10_000.0,
        }
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.form.insert_char(c);
        }
    }

    fn fill_valid_form(app: &mut App) {
        type_str(app, "Laskar Pelangi");
        app.form.focus_next();
        type_str(app, "Novel tentang sekolah di Belitung");
        app.form.focus_next();
        type_str(app, "85000");
    }

    #[test]
    fn start_issues_a_single_load() {
        let (mut app, mut rx) = app_with_rx();
        app.start();
        assert_eq!(app.page, PageState::Loading);
        assert_eq!(rx.try_recv().unwrap(), BookCommand::LoadAll);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn load_failure_replaces_the_page_with_the_raw_message() {
        let (mut app, _rx) = app_with_rx();
        app.start();
        app.apply_event(BookEvent::LoadFailed("connection refused".into()));
        assert_eq!(app.page, PageState::Failed("connection refused".into()));
    }

    #[test]
    fn loaded_books_replace_the_list() {
        let (mut app, _rx) = app_with_rx();
        app.apply_event(BookEvent::Loaded(vec![book(1, "a"), book(2, "b")]));
        assert_eq!(app.page, PageState::Ready);
        assert_eq!(app.books.len(), 2);
    }

    #[test]
    fn fetched_record_enters_edit_mode() {
        let (mut app, _rx) = app_with_rx();
        app.focused = FocusedPanel::List;
        app.apply_event(BookEvent::Fetched(book(42, "Bumi Manusia")));

        assert_eq!(app.form.mode, FormMode::Edit(42));
        assert_eq!(app.form.name, "Bumi Manusia");
        assert_eq!(app.form.submit_label(), "Update");
        assert_eq!(app.focused, FocusedPanel::Form);
    }

    #[test]
    fn submit_in_create_mode_posts_and_reset_follows_success() {
        let (mut app, mut rx) = app_with_rx();
        fill_valid_form(&mut app);

        app.submit();
        let cmd = rx.try_recv().unwrap();
        let BookCommand::Create(draft) = cmd else {
            panic!("expected Create, got {cmd:?}");
        };
        assert_eq!(draft.name, "Laskar Pelangi");

        // Server answers; list gains the record, form returns to create mode
        app.apply_event(BookEvent::Created(book(7, "Laskar Pelangi")));
        assert_eq!(app.books.len(), 1);
        assert!(app.form.name.is_empty());
        assert_eq!(app.form.submit_label(), "Submit");
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn submit_is_a_noop_when_form_cannot_submit() {
        let (mut app, mut rx) = app_with_rx();
        type_str(&mut app, "ab"); // dirty but invalid
        app.submit();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn update_replaces_only_the_matching_row() {
        let (mut app, mut rx) = app_with_rx();
        app.apply_event(BookEvent::Loaded(vec![book(1, "satu"), book(2, "dua")]));
        app.apply_event(BookEvent::Fetched(book(2, "dua")));

        // modify something so the form becomes submittable
        app.form.insert_char('!');
        app.submit();

        let cmd = rx.try_recv().unwrap();
        assert!(matches!(cmd, BookCommand::Update(2, _)), "got {cmd:?}");

        app.apply_event(BookEvent::Updated(book(2, "dua edisi revisi")));
        assert_eq!(app.books[0].name, "satu");
        assert_eq!(app.books[1].name, "dua edisi revisi");
        assert_eq!(app.form.mode, FormMode::Create);
    }

    #[test]
    fn save_failure_preserves_the_form_input() {
        let (mut app, _rx) = app_with_rx();
        fill_valid_form(&mut app);
        app.submit();

        app.apply_event(BookEvent::SaveFailed("server returned 500".into()));
        assert_eq!(app.form.name, "Laskar Pelangi");
        assert!(app.form.is_dirty());
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn cancelled_delete_issues_no_command_and_keeps_the_list() {
        let (mut app, mut rx) = app_with_rx();
        app.apply_event(BookEvent::Loaded(vec![book(1, "satu"), book(2, "dua")]));
        app.request_delete_selected();
        assert!(matches!(app.modal, Some(Modal::ConfirmDelete { id: 1, .. })));

        app.resolve_confirm(false);
        assert!(app.modal.is_none());
        assert!(rx.try_recv().is_err());
        assert_eq!(app.books.len(), 2);
    }

    #[test]
    fn confirmed_delete_issues_exactly_one_command() {
        let (mut app, mut rx) = app_with_rx();
        app.apply_event(BookEvent::Loaded(vec![book(1, "satu"), book(2, "dua")]));
        app.request_delete_selected();
        app.resolve_confirm(true);

        assert_eq!(rx.try_recv().unwrap(), BookCommand::Delete(1));
        assert!(rx.try_recv().is_err());

        // List shrinks only once the server confirms
        assert_eq!(app.books.len(), 2);
        app.apply_event(BookEvent::Deleted(1));
        assert_eq!(app.books.len(), 1);
        assert_eq!(app.books[0].id, 2);
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn failed_delete_keeps_the_row_and_reports_failure() {
        let (mut app, _rx) = app_with_rx();
        app.apply_event(BookEvent::Loaded(vec![book(1, "satu")]));
        app.request_delete_selected();
        app.resolve_confirm(true);

        app.apply_event(BookEvent::DeleteFailed("server returned 404".into()));
        assert_eq!(app.books.len(), 1);
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn fetch_failure_surfaces_a_toast() {
        let (mut app, _rx) = app_with_rx();
        app.apply_event(BookEvent::FetchFailed("server returned 404".into()));
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Error);
        // and the form stays in create mode
        assert_eq!(app.form.mode, FormMode::Create);
    }

    #[test]
    fn per_field_errors_do_not_leak_across_fields() {
        let (mut app, _rx) = app_with_rx();
        type_str(&mut app, "ab");
        assert!(app.form.error(Field::Name).is_some());
        assert!(app
            .form
            .error(Field::Description)
            .is_some_and(|e| e != app.form.error(Field::Name).unwrap()));
    }

    #[test]
    fn selection_clamps_after_delete_of_last_row() {
        let (mut app, _rx) = app_with_rx();
        app.apply_event(BookEvent::Loaded(vec![book(1, "satu"), book(2, "dua")]));
        app.selected = 1;
        app.apply_event(BookEvent::Deleted(2));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn visible_range_follows_the_selection() {
        let (mut app, _rx) = app_with_rx();
        let books: Vec<Book> = (1..=10).map(|i| book(i, "b")).collect();
        app.apply_event(BookEvent::Loaded(books));

        app.selected = 7;
        assert_eq!(app.visible_range(4), (4, 8));
        app.selected = 2;
        assert_eq!(app.visible_range(4), (2, 6));
    }
}
