// Commands and events that flow between the TUI and the API worker
//
// The UI thread never performs network I/O: handlers enqueue a command,
// the worker executes it against the REST API, and the outcome comes back
// as an event. Using enums keeps the boundary pattern-matchable and
// type-safe across tasks.

use crate::model::{Book, BookDraft, BookId};

/// A request the page controller wants executed against the API
#[derive(Debug, Clone, PartialEq)]
pub enum BookCommand {
    /// GET the whole collection (initial page load)
    LoadAll,
    /// GET a single record to populate the form for editing
    Fetch(BookId),
    /// POST a new record
    Create(BookDraft),
    /// PUT a full-record replace
    Update(BookId, BookDraft),
    /// DELETE by id (already confirmed by the operator)
    Delete(BookId),
}

/// The outcome of a command, applied to controller state on arrival
#[derive(Debug, Clone, PartialEq)]
pub enum BookEvent {
    /// Initial load finished; replaces the in-memory list wholesale
    Loaded(Vec<Book>),
    /// Initial load failed; the page renders this raw message instead
    /// of any normal content
    LoadFailed(String),

    /// Single record fetched for editing
    Fetched(Book),
    FetchFailed(String),

    /// Server accepted a create; carries the record with its assigned id
    Created(Book),
    /// Server accepted an update; carries the record as stored
    Updated(Book),
    /// Create or update failed; the form keeps the operator's input
    SaveFailed(String),

    /// Delete confirmed by the server
    Deleted(BookId),
    DeleteFailed(String),
}
