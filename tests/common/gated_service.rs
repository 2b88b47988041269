//! In-memory `BookDataService` whose calls resolve only when the test says so.
//!
//! Every service call is handed to the test as a [`PendingCall`]. The store
//! has already dispatched its pending intent by the time the call shows up,
//! so tests can inspect the in-flight state before replying.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bookshelf::service::{Book, BookDataService, FilterParams, ServiceError};
use tokio::sync::{mpsc, oneshot};

/// Which service method was called.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Books(FilterParams),
    Categories,
    PublicationYears,
    Book(String),
}

/// Reply for a pending call.
#[derive(Debug)]
pub enum Reply {
    Books(Result<Vec<Book>, ServiceError>),
    Labels(Result<Vec<String>, ServiceError>),
    Book(Result<Book, ServiceError>),
}

/// A service call waiting for its reply.
pub struct PendingCall {
    pub call: Call,
    reply: oneshot::Sender<Reply>,
}

impl PendingCall {
    pub fn respond(self, reply: Reply) {
        let _ = self.reply.send(reply);
    }
}

pub struct GatedService {
    calls: mpsc::UnboundedSender<PendingCall>,
}

/// Test side of a [`GatedService`].
pub struct CallQueue {
    calls: mpsc::UnboundedReceiver<PendingCall>,
}

impl CallQueue {
    /// Wait for the next service call.
    pub async fn next(&mut self) -> PendingCall {
        tokio::time::timeout(Duration::from_secs(5), self.calls.recv())
            .await
            .expect("Timed out waiting for a service call")
            .expect("Service dropped")
    }
}

impl GatedService {
    pub fn new() -> (Arc<Self>, CallQueue) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { calls: tx }), CallQueue { calls: rx })
    }

    async fn call(&self, call: Call) -> Reply {
        let (tx, rx) = oneshot::channel();
        self.calls
            .send(PendingCall { call, reply: tx })
            .expect("Test dropped the call queue");
        rx.await.expect("Test dropped a pending call")
    }
}

#[async_trait]
impl BookDataService for GatedService {
    async fn get_all_filtered_books(
        &self,
        filters: &FilterParams,
    ) -> Result<Vec<Book>, ServiceError> {
        match self.call(Call::Books(filters.clone())).await {
            Reply::Books(result) => result,
            other => panic!("Expected Reply::Books, got {:?}", other),
        }
    }

    async fn get_all_categories(&self) -> Result<Vec<String>, ServiceError> {
        match self.call(Call::Categories).await {
            Reply::Labels(result) => result,
            other => panic!("Expected Reply::Labels, got {:?}", other),
        }
    }

    async fn get_all_publication_years(&self) -> Result<Vec<String>, ServiceError> {
        match self.call(Call::PublicationYears).await {
            Reply::Labels(result) => result,
            other => panic!("Expected Reply::Labels, got {:?}", other),
        }
    }

    async fn get_book_by_id(&self, id: &str) -> Result<Book, ServiceError> {
        match self.call(Call::Book(id.to_string())).await {
            Reply::Book(result) => result,
            other => panic!("Expected Reply::Book, got {:?}", other),
        }
    }
}

/// A failure whose message is exactly `message`.
pub fn failure(status: u16, message: &str) -> ServiceError {
    ServiceError::Status {
        status,
        message: message.to_string(),
    }
}
