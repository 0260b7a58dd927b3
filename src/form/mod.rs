// Form state for creating and updating books
//
// Holds the raw field entries, the editing cursor, and the derived
// validity/dirty flags. The controller owns an explicit mode enum - a
// draft never smuggles an id to decide create vs update.

pub mod validate;

use crate::config::Messages;
use crate::model::{Book, BookDraft, BookId};
use validate::{Errors, Field};

/// Whether a submit creates a new record or replaces an existing one.
///
/// Owned by the page controller and toggled only by entering edit
/// (fetch succeeded) or leaving it (successful submit / explicit reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(BookId),
}

/// What a field accepts while typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Decimal,
}

impl FieldKind {
    fn of(field: Field) -> Self {
        match field {
            Field::Price => FieldKind::Decimal,
            _ => FieldKind::Text,
        }
    }

    /// Entry filter, the way a numeric input rejects letters as typed
    fn accepts(self, current: &str, cursor: usize, c: char) -> bool {
        match self {
            FieldKind::Text => !c.is_control(),
            FieldKind::Decimal => match c {
                '0'..='9' => true,
                '.' => !current.contains('.'),
                '-' => cursor == 0 && !current.starts_with('-'),
                _ => false,
            },
        }
    }
}

/// Validation-aware state behind the book form
#[derive(Debug, Clone)]
pub struct FormState {
    pub name: String,
    pub description: String,
    pub price: String,

    /// Field currently receiving keystrokes
    pub focused: Field,

    /// Cursor position in the focused field, as a character index
    cursor: usize,

    pub mode: FormMode,

    /// Field errors from the last eager validation pass
    pub errors: Errors,

    /// True once any field has been edited since the last reset/populate
    dirty: bool,

    messages: Messages,
}

impl FormState {
    pub fn new(messages: Messages) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            focused: Field::Name,
            cursor: 0,
            mode: FormMode::Create,
            errors: Errors::new(),
            dirty: false,
            messages,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Price => &self.price,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::Price => &mut self.price,
        }
    }

    /// Cursor position in the focused field (character index)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Error text for one field, if that field itself is invalid.
    /// Other fields' errors never leak here.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Submit gate: the form must be both schema-valid and modified
    pub fn can_submit(&self) -> bool {
        self.dirty && self.is_valid()
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Submit",
            FormMode::Edit(_) => "Update",
        }
    }

    // ─── Focus and cursor movement ───────────────────────────

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
        self.cursor = self.value(self.focused).chars().count();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
        self.cursor = self.value(self.focused).chars().count();
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let len = self.value(self.focused).chars().count();
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.value(self.focused).chars().count();
    }

    // ─── Editing ─────────────────────────────────────────────

    pub fn insert_char(&mut self, c: char) {
        let field = self.focused;
        let cursor = self.cursor;
        if !FieldKind::of(field).accepts(self.value(field), cursor, c) {
            return;
        }

        let byte_idx = char_to_byte_idx(self.value(field), cursor);
        self.value_mut(field).insert(byte_idx, c);
        self.cursor += 1;
        self.touch();
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let field = self.focused;
        let byte_idx = char_to_byte_idx(self.value(field), self.cursor - 1);
        self.value_mut(field).remove(byte_idx);
        self.cursor -= 1;
        self.touch();
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) {
        let field = self.focused;
        let len = self.value(field).chars().count();
        if self.cursor >= len {
            return;
        }
        let byte_idx = char_to_byte_idx(self.value(field), self.cursor);
        self.value_mut(field).remove(byte_idx);
        self.touch();
    }

    /// Mark the form edited and re-run validation (eager, every change)
    fn touch(&mut self) {
        self.dirty = true;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = validate::validate(&self.name, &self.description, &self.price, &self.messages);
    }

    // ─── Mode transitions ────────────────────────────────────

    /// Enter edit mode with a fetched record's values.
    ///
    /// Not dirty afterwards: the operator has to change something before
    /// Update becomes available. Validation still runs so a record the
    /// server let through out-of-range is visible immediately.
    pub fn populate(&mut self, book: &Book) {
        self.name = book.name.clone();
        self.description = book.description.clone();
        self.price = format_price_entry(book.price);
        self.mode = FormMode::Edit(book.id);
        self.focused = Field::Name;
        self.cursor = self.name.chars().count();
        self.dirty = false;
        self.revalidate();
    }

    /// Return to an empty create-mode form
    pub fn reset(&mut self) {
        self.name.clear();
        self.description.clear();
        self.price.clear();
        self.mode = FormMode::Create;
        self.focused = Field::Name;
        self.cursor = 0;
        self.dirty = false;
        // A pristine form shows no errors until the first edit
        self.errors.clear();
    }

    /// Build the request payload. None while the form is invalid.
    pub fn draft(&self) -> Option<BookDraft> {
        if !self.is_valid() {
            return None;
        }
        let price = self.price.trim().parse::<f64>().ok()?;
        Some(BookDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price,
        })
    }
}

fn char_to_byte_idx(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Render a wire price back into an editable entry string
fn format_price_entry(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        price.to_string()
    }
}
