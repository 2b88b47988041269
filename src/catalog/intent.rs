//! Intents for the book catalog slice.

use crate::mvi::Intent;
use crate::service::{Book, FetchFailure};

use super::state::{CatalogState, RequestId, RequestKind};

/// Lifecycle phase of one async request.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    /// Request issued, response outstanding.
    Pending { request_id: RequestId },

    /// Service returned a payload.
    Fulfilled { request_id: RequestId, payload: T },

    /// Service call failed.
    Rejected {
        request_id: RequestId,
        failure: FetchFailure,
    },
}

impl<T> Phase<T> {
    pub fn request_id(&self) -> RequestId {
        match self {
            Phase::Pending { request_id }
            | Phase::Fulfilled { request_id, .. }
            | Phase::Rejected { request_id, .. } => *request_id,
        }
    }

    /// True for `Fulfilled` and `Rejected`.
    pub fn is_resolution(&self) -> bool {
        !matches!(self, Phase::Pending { .. })
    }
}

/// Intents that can be dispatched to the catalog store.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIntent {
    /// Filtered book listing.
    Books(Phase<Vec<Book>>),

    /// Category labels.
    Categories(Phase<Vec<String>>),

    /// Publication year labels.
    PublicationYears(Phase<Vec<String>>),

    /// Single book detail.
    BookDetail(Phase<Book>),

    /// Drop the selected book.
    ClearSelectedBook,
}

impl Intent for CatalogIntent {}

impl CatalogIntent {
    /// Operation kind and request id, for request phases.
    pub fn request(&self) -> Option<(RequestKind, RequestId)> {
        self.request_phase().map(|(kind, request_id, _)| (kind, request_id))
    }

    /// Kind and id of a resolution `state` would drop as stale.
    pub fn stale_request(&self, state: &CatalogState) -> Option<(RequestKind, RequestId)> {
        self.request_phase()
            .filter(|&(kind, request_id, resolves)| resolves && !state.accepts(kind, request_id))
            .map(|(kind, request_id, _)| (kind, request_id))
    }

    fn request_phase(&self) -> Option<(RequestKind, RequestId, bool)> {
        fn tag<T>(kind: RequestKind, phase: &Phase<T>) -> (RequestKind, RequestId, bool) {
            (kind, phase.request_id(), phase.is_resolution())
        }

        match self {
            CatalogIntent::Books(phase) => Some(tag(RequestKind::Books, phase)),
            CatalogIntent::Categories(phase) => Some(tag(RequestKind::Categories, phase)),
            CatalogIntent::PublicationYears(phase) => {
                Some(tag(RequestKind::PublicationYears, phase))
            }
            CatalogIntent::BookDetail(phase) => Some(tag(RequestKind::BookDetail, phase)),
            CatalogIntent::ClearSelectedBook => None,
        }
    }
}
