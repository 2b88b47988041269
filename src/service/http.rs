//! HTTP implementation of [`BookDataService`].

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;

use super::error::ServiceError;
use super::types::{labels_from_value, Book, FilterParams};
use super::BookDataService;

/// Book API client over HTTP.
///
/// Endpoints are resolved relative to the configured base URL:
/// `books`, `books/categories`, `books/publication-years`, `books/{id}`.
pub struct HttpBookService {
    client: Client,
    base_url: Url,
    timeout: Duration,
    connect_timeout: Duration,
}

impl HttpBookService {
    /// Build a client from API config.
    pub fn new(config: &ApiConfig) -> Result<Self, ServiceError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ServiceError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ServiceError::InvalidUrl(config.base_url.clone()));
        }

        let timeout = Duration::from_secs(u64::from(config.timeout_seconds));
        let connect_timeout = Duration::from_secs(u64::from(config.connect_timeout_seconds));
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(|source| ServiceError::Connection { source })?;

        Ok(Self {
            client,
            base_url,
            timeout,
            connect_timeout,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ServiceError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ServiceError::InvalidUrl(self.base_url.to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ServiceError> {
        tracing::debug!(url = %url, "Sending catalog request");

        let start = Instant::now();
        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, latency_ms, "Catalog API error");
            return Err(ServiceError::status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;

        tracing::debug!(
            url = %url,
            status = %status,
            latency_ms,
            bytes = body.len(),
            "Catalog response received"
        );

        serde_json::from_slice(&body).map_err(|e| ServiceError::Decode(e.to_string()))
    }

    /// The limit that expired: the connect timeout while connecting,
    /// otherwise the whole-request timeout.
    fn timeout_limit(&self, connecting: bool) -> Duration {
        if connecting {
            self.connect_timeout
        } else {
            self.timeout
        }
    }

    fn transport_error(&self, source: reqwest::Error) -> ServiceError {
        if source.is_timeout() {
            ServiceError::Timeout {
                duration: self.timeout_limit(source.is_connect()).as_secs(),
            }
        } else {
            ServiceError::Connection { source }
        }
    }
}

#[async_trait]
impl BookDataService for HttpBookService {
    async fn get_all_filtered_books(
        &self,
        filters: &FilterParams,
    ) -> Result<Vec<Book>, ServiceError> {
        let mut url = self.endpoint(&["books"])?;
        let pairs = filters.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        self.get_json(url).await
    }

    async fn get_all_categories(&self) -> Result<Vec<String>, ServiceError> {
        let url = self.endpoint(&["books", "categories"])?;
        let value: Value = self.get_json(url).await?;
        labels_from_value(value).map_err(|e| ServiceError::Decode(e.to_string()))
    }

    async fn get_all_publication_years(&self) -> Result<Vec<String>, ServiceError> {
        let url = self.endpoint(&["books", "publication-years"])?;
        let value: Value = self.get_json(url).await?;
        labels_from_value(value).map_err(|e| ServiceError::Decode(e.to_string()))
    }

    async fn get_book_by_id(&self, id: &str) -> Result<Book, ServiceError> {
        if id.trim().is_empty() {
            return Err(ServiceError::InvalidRequest(
                "book id must not be empty".to_string(),
            ));
        }
        let url = self.endpoint(&["books", id])?;
        self.get_json(url).await
    }
}
