// API worker task
//
// Owns the `BookService` and drains the command channel strictly
// sequentially - one request in flight at a time, no coordination, no
// retries. Every outcome (success or failure) goes back to the TUI as a
// `BookEvent`; failures are additionally logged as the diagnostic record.
//
// The task exits when the command channel closes (the TUI quit) or when
// the event channel closes (nobody is listening anymore).

use super::BookService;
use crate::events::{BookCommand, BookEvent};
use tokio::sync::mpsc;

/// Run the worker until either channel closes
pub async fn run<S: BookService>(
    service: S,
    mut commands: mpsc::Receiver<BookCommand>,
    events: mpsc::Sender<BookEvent>,
) {
    while let Some(command) = commands.recv().await {
        tracing::debug!("Executing {:?}", command);
        let event = execute(&service, command).await;
        if events.send(event).await.is_err() {
            break;
        }
    }
    tracing::debug!("API worker shutting down");
}

async fn execute<S: BookService>(service: &S, command: BookCommand) -> BookEvent {
    match command {
        BookCommand::LoadAll => match service.list().await {
            Ok(books) => BookEvent::Loaded(books),
            Err(e) => {
                tracing::error!("Failed to load books: {e}");
                BookEvent::LoadFailed(e.to_string())
            }
        },
        BookCommand::Fetch(id) => match service.get(id).await {
            Ok(book) => BookEvent::Fetched(book),
            Err(e) => {
                tracing::error!("Failed to fetch book {id}: {e}");
                BookEvent::FetchFailed(e.to_string())
            }
        },
        BookCommand::Create(draft) => match service.create(draft).await {
            Ok(book) => BookEvent::Created(book),
            Err(e) => {
                tracing::error!("Failed to create book: {e}");
                BookEvent::SaveFailed(e.to_string())
            }
        },
        BookCommand::Update(id, draft) => match service.update(id, draft).await {
            Ok(book) => BookEvent::Updated(book),
            Err(e) => {
                tracing::error!("Failed to update book {id}: {e}");
                BookEvent::SaveFailed(e.to_string())
            }
        },
        BookCommand::Delete(id) => match service.delete(id).await {
            Ok(()) => BookEvent::Deleted(id),
            Err(e) => {
                tracing::error!("Failed to delete book {id}: {e}");
                BookEvent::DeleteFailed(e.to_string())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::demo::DemoBookService;
    use crate::model::BookDraft;

    fn draft(name: &str) -> BookDraft {
        BookDraft {
            name: name.to_string(),
            description: "deskripsi yang cukup panjang".into(),
            price: 45_000.0,
        }
    }

    #[tokio::test]
    async fn commands_run_sequentially_and_events_come_back_in_order() {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (event_tx, mut event_rx) = mpsc::channel(16);
        let worker = tokio::spawn(run(DemoBookService::new(), cmd_rx, event_tx));

        cmd_tx.send(BookCommand::LoadAll).await.unwrap();
        cmd_tx.send(BookCommand::Create(draft("Pertama"))).await.unwrap();
        cmd_tx.send(BookCommand::Create(draft("Kedua"))).await.unwrap();
        cmd_tx.send(BookCommand::Delete(1)).await.unwrap();
        cmd_tx.send(BookCommand::LoadAll).await.unwrap();

        assert_eq!(event_rx.recv().await.unwrap(), BookEvent::Loaded(vec![]));
        assert!(matches!(
            event_rx.recv().await.unwrap(),
            BookEvent::Created(b) if b.id == 1
        ));
        assert!(matches!(
            event_rx.recv().await.unwrap(),
            BookEvent::Created(b) if b.id == 2
        ));
        assert_eq!(event_rx.recv().await.unwrap(), BookEvent::Deleted(1));
        assert!(matches!(
            event_rx.recv().await.unwrap(),
            BookEvent::Loaded(books) if books.len() == 1 && books[0].id == 2
        ));

        // Closing the command channel shuts the worker down
        drop(cmd_tx);
        worker.await.unwrap();
    }

    #[tokio::test]
    async fn failures_become_failure_events_not_panics() {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (event_tx, mut event_rx) = mpsc::channel(16);
        tokio::spawn(run(DemoBookService::new(), cmd_rx, event_tx));

        cmd_tx.send(BookCommand::Fetch(9)).await.unwrap();
        cmd_tx.send(BookCommand::Update(9, draft("X"))).await.unwrap();
        cmd_tx.send(BookCommand::Delete(9)).await.unwrap();

        assert!(matches!(
            event_rx.recv().await.unwrap(),
            BookEvent::FetchFailed(m) if m.contains("404")
        ));
        assert!(matches!(
            event_rx.recv().await.unwrap(),
            BookEvent::SaveFailed(m) if m.contains("404")
        ));
        assert!(matches!(
            event_rx.recv().await.unwrap(),
            BookEvent::DeleteFailed(m) if m.contains("404")
        ));
    }
}
