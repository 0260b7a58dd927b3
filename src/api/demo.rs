// Demo backend - an in-memory books collection
//
// Lets the TUI run without a REST server (`bookdesk --demo`) and gives
// tests a deterministic `BookService`. Behaves like a compliant backend:
// ids are assigned here, updates are full replaces, unknown ids are 404s.

use super::{ApiError, BookService};
use crate::model::{Book, BookDraft, BookId};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug)]
struct DemoState {
    books: Vec<Book>,
    next_id: BookId,
}

/// In-memory `BookService`. Cloning shares the collection.
#[derive(Debug, Clone)]
pub struct DemoBookService {
    state: Arc<Mutex<DemoState>>,
}

impl DemoBookService {
    /// Empty collection; ids start at 1
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(DemoState {
                books: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Collection pre-filled with a few records for showcasing the TUI
    pub fn seeded() -> Self {
        let service = Self::new();
        let books = vec![
            Book {
                id: 1,
                name: "Laskar Pelangi".into(),
                description: "Sepuluh anak Belitung dan sekolah yang nyaris roboh".into(),
                price: 85_000.0,
            },
            Book {
                id: 2,
                name: "Bumi Manusia".into(),
                description: "Buku pertama Tetralogi Buru karya Pramoedya".into(),
                price: 120_000.0,
            },
            Book {
                id: 3,
                name: "Cantik Itu Luka".into(),
                description: "Novel Eka Kurniawan tentang Dewi Ayu dan Halimunda".into(),
                price: 98_000.0,
            },
        ];
        {
            let mut state = service.state.try_lock().expect("fresh state is uncontended");
            state.next_id = books.len() as BookId + 1;
            state.books = books;
        }
        service
    }

    fn not_found(id: BookId) -> ApiError {
        ApiError::Status {
            status: 404,
            message: format!("No book with id {id}"),
        }
    }
}

impl Default for DemoBookService {
    fn default() -> Self {
        Self::new()
    }
}

impl BookService for DemoBookService {
    async fn list(&self) -> Result<Vec<Book>, ApiError> {
        Ok(self.state.lock().await.books.clone())
    }

    async fn get(&self, id: BookId) -> Result<Book, ApiError> {
        self.state
            .lock()
            .await
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, draft: BookDraft) -> Result<Book, ApiError> {
        let mut state = self.state.lock().await;
        let book = Book {
            id: state.next_id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
        };
        state.next_id += 1;
        state.books.push(book.clone());
        Ok(book)
    }

    async fn update(&self, id: BookId, draft: BookDraft) -> Result<Book, ApiError> {
        let mut state = self.state.lock().await;
        let slot = state
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        *slot = Book {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
        };
        Ok(slot.clone())
    }

    async fn delete(&self, id: BookId) -> Result<(), ApiError> {
        let mut state = self.state.lock().await;
        let before = state.books.len();
        state.books.retain(|b| b.id != id);
        if state.books.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> BookDraft {
        BookDraft {
            name: name.to_string(),
            description: "deskripsi yang cukup panjang".into(),
            price: 50_000.0,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let service = DemoBookService::new();
        let a = service.create(draft("A")).await.unwrap();
        let b = service.create(draft("B")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_replaces_the_full_record() {
        let service = DemoBookService::seeded();
        let replaced = service.update(2, draft("Pengganti")).await.unwrap();
        assert_eq!(replaced.id, 2);
        assert_eq!(replaced.name, "Pengganti");

        let books = service.list().await.unwrap();
        assert_eq!(books[1].name, "Pengganti");
        assert_eq!(books[0].name, "Laskar Pelangi");
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let service = DemoBookService::new();
        assert!(matches!(
            service.get(99).await,
            Err(ApiError::Status { status: 404, .. })
        ));
        assert!(matches!(
            service.update(99, draft("X")).await,
            Err(ApiError::Status { status: 404, .. })
        ));
        assert!(matches!(
            service.delete(99).await,
            Err(ApiError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() {
        let service = DemoBookService::seeded();
        service.delete(1).await.unwrap();
        let books = service.list().await.unwrap();
        assert_eq!(books.len(), 2);
        assert!(books.iter().all(|b| b.id != 1));
    }
}
