//! Book data service: the network-facing collaborator of the catalog store.

mod error;
mod http;
mod types;

pub use error::{FailureKind, FetchFailure, ServiceError};
pub use http::HttpBookService;
pub use types::{Book, FilterParams};

use async_trait::async_trait;

/// Source of catalog data.
///
/// Implementations perform the I/O; the store only sees parsed payloads
/// or a [`ServiceError`].
#[async_trait]
pub trait BookDataService: Send + Sync {
    /// Books matching `filters`, in server order.
    async fn get_all_filtered_books(
        &self,
        filters: &FilterParams,
    ) -> Result<Vec<Book>, ServiceError>;

    /// All category labels.
    async fn get_all_categories(&self) -> Result<Vec<String>, ServiceError>;

    /// All publication year labels.
    async fn get_all_publication_years(&self) -> Result<Vec<String>, ServiceError>;

    /// A single book by id.
    async fn get_book_by_id(&self, id: &str) -> Result<Book, ServiceError>;
}
