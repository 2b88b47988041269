//! State for the book catalog slice.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mvi::StoreState;
use crate::service::{Book, FetchFailure};

/// Identifier attached to a request when it is issued.
///
/// Ids grow monotonically within one store. `RequestId::default()` means
/// "nothing issued yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(u64);

impl RequestId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The four async operations of the slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Books,
    Categories,
    PublicationYears,
    BookDetail,
}

impl RequestKind {
    /// Operation name for logs.
    pub fn name(self) -> &'static str {
        match self {
            RequestKind::Books => "fetch_books",
            RequestKind::Categories => "fetch_categories",
            RequestKind::PublicationYears => "fetch_publication_years",
            RequestKind::BookDetail => "fetch_book_by_id",
        }
    }

    /// Whether this operation drives `loading` and writes `error`.
    ///
    /// Category and year lookups do neither.
    pub fn tracks_loading(self) -> bool {
        matches!(self, RequestKind::Books | RequestKind::BookDetail)
    }
}

/// What to do with a response that resolves after a newer request of the
/// same kind was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Apply every resolution; the last one to resolve wins.
    #[default]
    Apply,
    /// Apply a resolution only if it belongs to the latest issued request.
    Discard,
}

/// Latest issued request id per operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestLedger {
    books: RequestId,
    categories: RequestId,
    publication_years: RequestId,
    book_detail: RequestId,
}

impl RequestLedger {
    pub fn latest(&self, kind: RequestKind) -> RequestId {
        match kind {
            RequestKind::Books => self.books,
            RequestKind::Categories => self.categories,
            RequestKind::PublicationYears => self.publication_years,
            RequestKind::BookDetail => self.book_detail,
        }
    }

    /// Record an issued request. Out-of-order pending intents never move the
    /// ledger backwards.
    pub fn record(&mut self, kind: RequestKind, id: RequestId) {
        let slot = match kind {
            RequestKind::Books => &mut self.books,
            RequestKind::Categories => &mut self.categories,
            RequestKind::PublicationYears => &mut self.publication_years,
            RequestKind::BookDetail => &mut self.book_detail,
        };
        *slot = (*slot).max(id);
    }
}

/// State of the book catalog slice.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogState {
    /// Books from the last accepted list fetch, in server order.
    pub books: Vec<Book>,
    /// Book from the last accepted detail fetch.
    pub selected_book: Option<Book>,
    pub categories: Vec<String>,
    pub publication_years: Vec<String>,
    /// True while a list or detail request is in flight.
    pub loading: bool,
    /// Last list/detail failure. Never cleared by a later success.
    pub error: Option<FetchFailure>,
    #[serde(skip)]
    pub(super) requests: RequestLedger,
    #[serde(skip)]
    pub(super) stale_responses: StalePolicy,
}

impl StoreState for CatalogState {}

impl CatalogState {
    /// Empty state resolving responses with `policy`.
    pub fn with_policy(policy: StalePolicy) -> Self {
        Self {
            stale_responses: policy,
            ..Self::default()
        }
    }

    pub fn stale_policy(&self) -> StalePolicy {
        self.stale_responses
    }

    /// Latest issued request of `kind`.
    pub fn latest_request(&self, kind: RequestKind) -> RequestId {
        self.requests.latest(kind)
    }

    /// Whether a resolution of request `id` should be applied.
    pub fn accepts(&self, kind: RequestKind, id: RequestId) -> bool {
        match self.stale_responses {
            StalePolicy::Apply => true,
            StalePolicy::Discard => id >= self.requests.latest(kind),
        }
    }
}
