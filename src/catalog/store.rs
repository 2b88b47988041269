//! Catalog store: owns the slice state and runs its async operations.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::config::StoreConfig;
use crate::mvi::Reducer;
use crate::service::{Book, BookDataService, FetchFailure, FilterParams, ServiceError};

use super::intent::{CatalogIntent, Phase};
use super::reducer::CatalogReducer;
use super::state::{CatalogState, RequestId, RequestKind, StalePolicy};

/// Client-side state container for the book catalog.
///
/// Cloning is cheap; clones share the same state and service. Every state
/// change goes through [`CatalogReducer`] inside a single `send_modify`, so
/// reductions never overlap and no lock is held across an `.await`.
#[derive(Clone)]
pub struct CatalogStore {
    service: Arc<dyn BookDataService>,
    state: Arc<watch::Sender<CatalogState>>,
    next_request: Arc<AtomicU64>,
}

impl CatalogStore {
    pub fn new(service: Arc<dyn BookDataService>, config: &StoreConfig) -> Self {
        Self::with_policy(service, config.stale_responses)
    }

    pub fn with_policy(service: Arc<dyn BookDataService>, policy: StalePolicy) -> Self {
        let (state, _) = watch::channel(CatalogState::with_policy(policy));
        Self {
            service,
            state: Arc::new(state),
            next_request: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every dispatched intent.
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }

    /// Run one intent through the reducer.
    pub fn dispatch(&self, intent: CatalogIntent) {
        self.state.send_modify(|state| {
            if let Some((kind, request_id)) = intent.stale_request(state) {
                tracing::debug!(
                    operation = kind.name(),
                    request_id = request_id.get(),
                    latest = state.latest_request(kind).get(),
                    "Discarding stale response"
                );
            }
            *state = CatalogReducer::reduce(std::mem::take(state), intent);
        });
    }

    /// Fetch the book listing for `filters` into `books`.
    pub async fn fetch_books(&self, filters: FilterParams) -> Result<Vec<Book>, FetchFailure> {
        self.run(
            RequestKind::Books,
            CatalogIntent::Books,
            self.service.get_all_filtered_books(&filters),
        )
        .await
    }

    /// Fetch category labels into `categories`.
    ///
    /// A failure is returned and logged but not recorded in the state.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, FetchFailure> {
        self.run(
            RequestKind::Categories,
            CatalogIntent::Categories,
            self.service.get_all_categories(),
        )
        .await
    }

    /// Fetch publication year labels into `publication_years`.
    ///
    /// A failure is returned and logged but not recorded in the state.
    pub async fn fetch_publication_years(&self) -> Result<Vec<String>, FetchFailure> {
        self.run(
            RequestKind::PublicationYears,
            CatalogIntent::PublicationYears,
            self.service.get_all_publication_years(),
        )
        .await
    }

    /// Fetch one book into `selected_book`.
    pub async fn fetch_book_by_id(&self, id: &str) -> Result<Book, FetchFailure> {
        self.run(
            RequestKind::BookDetail,
            CatalogIntent::BookDetail,
            self.service.get_book_by_id(id),
        )
        .await
    }

    pub fn clear_selected_book(&self) {
        self.dispatch(CatalogIntent::ClearSelectedBook);
    }

    fn issue(&self) -> RequestId {
        RequestId::new(self.next_request.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Drive one request through pending and its terminal phase.
    async fn run<T, F>(
        &self,
        kind: RequestKind,
        wrap: fn(Phase<T>) -> CatalogIntent,
        call: F,
    ) -> Result<T, FetchFailure>
    where
        T: Clone,
        F: Future<Output = Result<T, ServiceError>>,
    {
        let request_id = self.issue();
        tracing::debug!(
            operation = kind.name(),
            request_id = request_id.get(),
            "Request issued"
        );
        self.dispatch(wrap(Phase::Pending { request_id }));

        match call.await {
            Ok(payload) => {
                tracing::debug!(
                    operation = kind.name(),
                    request_id = request_id.get(),
                    "Request fulfilled"
                );
                self.dispatch(wrap(Phase::Fulfilled {
                    request_id,
                    payload: payload.clone(),
                }));
                Ok(payload)
            }
            Err(err) => {
                let failure = FetchFailure::from(&err);
                tracing::warn!(
                    operation = kind.name(),
                    request_id = request_id.get(),
                    failure_kind = ?failure.kind,
                    error = %err,
                    "Request rejected"
                );
                self.dispatch(wrap(Phase::Rejected {
                    request_id,
                    failure: failure.clone(),
                }));
                Err(failure)
            }
        }
    }
}
