// Wire and domain types for the books resource
//
// The remote API is the sole source of truth for ids: a book has no id
// until the server assigns one on create. Every endpoint wraps its payload
// in a `{ "data": ... }` envelope.

use serde::{Deserialize, Serialize};

/// Server-assigned book identifier. Never generated client-side.
pub type BookId = i64;

/// A book record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Request body for create (POST) and update (PUT)
///
/// Updates are full-record replaces keyed by the id in the resource path;
/// the draft itself never carries an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// The `{ "data": ... }` wrapper used by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Replace the entry matching `book.id` in place, preserving order.
///
/// Returns false (list untouched) when no entry matches - the server
/// returned a record we never knew about.
pub fn replace_book(books: &mut [Book], book: Book) -> bool {
    match books.iter_mut().find(|b| b.id == book.id) {
        Some(slot) => {
            *slot = book;
            true
        }
        None => false,
    }
}

/// Remove the entry with the given id. Returns false when absent.
pub fn remove_book(books: &mut Vec<Book>, id: BookId) -> bool {
    let before = books.len();
    books.retain(|b| b.id != id);
    books.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: BookId, name: &str) -> Book {
        Book {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            price: 10_000.0,
        }
    }

    #[test]
    fn replace_preserves_order_and_neighbors() {
        let mut books = vec![book(1, "one"), book(2, "two"), book(3, "three")];
        let replaced = replace_book(&mut books, book(2, "two revised"));

        assert!(replaced);
        assert_eq!(books.len(), 3);
        assert_eq!(books[0].name, "one");
        assert_eq!(books[1].name, "two revised");
        assert_eq!(books[2].name, "three");
    }

    #[test]
    fn replace_unknown_id_is_a_noop() {
        let mut books = vec![book(1, "one")];
        assert!(!replace_book(&mut books, book(9, "ghost")));
        assert_eq!(books[0].name, "one");
    }

    #[test]
    fn remove_takes_exactly_one_entry() {
        let mut books = vec![book(1, "one"), book(2, "two")];
        assert!(remove_book(&mut books, 1));
        assert_eq!(books, vec![book(2, "two")]);
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let mut books = vec![book(2, "two")];
        assert!(!remove_book(&mut books, 1));
        assert_eq!(books.len(), 1);
    }

    #[test]
    fn book_deserializes_from_envelope() {
        let json = r#"{"data":{"id":7,"name":"Laskar Pelangi","description":"Novel tentang sekolah di Belitung","price":85000}}"#;
        let envelope: Envelope<Book> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.id, 7);
        assert_eq!(envelope.data.price, 85000.0);
    }
}
