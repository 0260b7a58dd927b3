// REST client for the books API
//
// `BookService` is the seam between the page controller and the remote
// collection: the worker task talks to the trait, so the HTTP client and
// the in-memory demo backend are interchangeable (and tests never need a
// network).
//
// Wire contract (JSON over HTTP, `{ "data": ... }` envelopes):
//   GET    {base}/api/books        -> { data: [Book] }
//   GET    {base}/api/books/{id}   -> { data: Book }
//   POST   {base}/api/books        -> { data: Book }   (server assigns id)
//   PUT    {base}/api/books/{id}   -> { data: Book }   (full replace)
//   DELETE {base}/api/books/{id}   -> 2xx, body unused

pub mod demo;
pub mod worker;

use crate::model::{Book, BookDraft, BookId, Envelope};
use std::future::Future;
use std::time::Duration;

/// Errors surfaced by a book service implementation
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, timeout, or body-decode failure
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// The five operations the page performs against the collection
pub trait BookService: Send + Sync + 'static {
    fn list(&self) -> impl Future<Output = Result<Vec<Book>, ApiError>> + Send;
    fn get(&self, id: BookId) -> impl Future<Output = Result<Book, ApiError>> + Send;
    fn create(&self, draft: BookDraft) -> impl Future<Output = Result<Book, ApiError>> + Send;
    fn update(
        &self,
        id: BookId,
        draft: BookDraft,
    ) -> impl Future<Output = Result<Book, ApiError>> + Send;
    fn delete(&self, id: BookId) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// reqwest-backed implementation against the configured base URL
#[derive(Debug, Clone)]
pub struct HttpBookService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBookService {
    /// Build the HTTP client with a request timeout and a small pool.
    /// No retries: a request either resolves or its failure is reported.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(4)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/api/books", self.base_url)
    }

    fn resource_url(&self, id: BookId) -> String {
        format!("{}/api/books/{}", self.base_url, id)
    }
}

/// Turn a non-success response into `ApiError::Status`, preferring the
/// server's own `message` field when the body carries one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                body.trim().to_string()
            }
        });

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

impl BookService for HttpBookService {
    async fn list(&self) -> Result<Vec<Book>, ApiError> {
        let response = self.client.get(self.collection_url()).send().await?;
        let envelope: Envelope<Vec<Book>> = check_status(response).await?.json().await?;
        Ok(envelope.data)
    }

    async fn get(&self, id: BookId) -> Result<Book, ApiError> {
        let response = self.client.get(self.resource_url(id)).send().await?;
        let envelope: Envelope<Book> = check_status(response).await?.json().await?;
        Ok(envelope.data)
    }

    async fn create(&self, draft: BookDraft) -> Result<Book, ApiError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(&draft)
            .send()
            .await?;
        let envelope: Envelope<Book> = check_status(response).await?.json().await?;
        Ok(envelope.data)
    }

    async fn update(&self, id: BookId, draft: BookDraft) -> Result<Book, ApiError> {
        let response = self
            .client
            .put(self.resource_url(id))
            .json(&draft)
            .send()
            .await?;
        let envelope: Envelope<Book> = check_status(response).await?.json().await?;
        Ok(envelope.data)
    }

    async fn delete(&self, id: BookId) -> Result<(), ApiError> {
        let response = self.client.delete(self.resource_url(id)).send().await?;
        // Success body is unused by contract
        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::demo::DemoBookService;
    use super::*;
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let service = HttpBookService::new("http://localhost:8000/").unwrap();
        assert_eq!(service.collection_url(), "http://localhost:8000/api/books");
        assert_eq!(service.resource_url(5), "http://localhost:8000/api/books/5");
    }

    // ─── HTTP client against an in-process mock server ───────
    //
    // The mock speaks the wire contract (envelopes, status codes) on an
    // ephemeral port, backed by the demo collection.

    type ApiResult<T> = Result<Json<Envelope<T>>, (StatusCode, Json<serde_json::Value>)>;

    fn not_found(e: ApiError) -> (StatusCode, Json<serde_json::Value>) {
        (StatusCode::NOT_FOUND, Json(json!({ "message": e.to_string() })))
    }

    async fn mock_list(State(svc): State<DemoBookService>) -> ApiResult<Vec<Book>> {
        Ok(Json(Envelope {
            data: svc.list().await.map_err(not_found)?,
        }))
    }

    async fn mock_get(State(svc): State<DemoBookService>, Path(id): Path<BookId>) -> ApiResult<Book> {
        Ok(Json(Envelope {
            data: svc.get(id).await.map_err(not_found)?,
        }))
    }

    async fn mock_create(
        State(svc): State<DemoBookService>,
        Json(draft): Json<BookDraft>,
    ) -> ApiResult<Book> {
        Ok(Json(Envelope {
            data: svc.create(draft).await.map_err(not_found)?,
        }))
    }

    async fn mock_update(
        State(svc): State<DemoBookService>,
        Path(id): Path<BookId>,
        Json(draft): Json<BookDraft>,
    ) -> ApiResult<Book> {
        Ok(Json(Envelope {
            data: svc.update(id, draft).await.map_err(not_found)?,
        }))
    }

    async fn mock_delete(
        State(svc): State<DemoBookService>,
        Path(id): Path<BookId>,
    ) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
        svc.delete(id).await.map_err(not_found)?;
        Ok(StatusCode::NO_CONTENT)
    }

    async fn spawn_mock_server(seed: DemoBookService) -> String {
        let router = Router::new()
            .route("/api/books", get(mock_list).post(mock_create))
            .route(
                "/api/books/:id",
                get(mock_get).put(mock_update).delete(mock_delete),
            )
            .with_state(seed);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock server");
        });

        format!("http://{addr}")
    }

    fn draft(name: &str) -> BookDraft {
        BookDraft {
            name: name.to_string(),
            description: "deskripsi yang cukup panjang".into(),
            price: 72_000.0,
        }
    }

    #[tokio::test]
    async fn full_crud_round_trip_over_http() {
        let base = spawn_mock_server(DemoBookService::new()).await;
        let client = HttpBookService::new(&base).unwrap();

        // POST assigns the id server-side
        let created = client.create(draft("Pulang")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Pulang");

        // GET list sees it
        let books = client.list().await.unwrap();
        assert_eq!(books.len(), 1);

        // PUT replaces the full record
        let updated = client.update(created.id, draft("Pulang (edisi baru)")).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Pulang (edisi baru)");

        // GET one reflects the replace
        let fetched = client.get(created.id).await.unwrap();
        assert_eq!(fetched.name, "Pulang (edisi baru)");

        // DELETE empties the collection
        client.delete(created.id).await.unwrap();
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_record_maps_to_status_error_with_server_message() {
        let base = spawn_mock_server(DemoBookService::new()).await;
        let client = HttpBookService::new(&base).unwrap();

        let err = client.get(42).await.unwrap_err();
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("42"), "server message passed through: {message}");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        // Nothing listens on this port
        let client = HttpBookService::new("http://127.0.0.1:1").unwrap();
        assert!(matches!(client.list().await, Err(ApiError::Transport(_))));
    }
}
