//! Textor HTTP Client
//!
//! Client toolkit for an asynchronous document-analysis service: submit
//! analysis jobs, poll them to completion, page through their results, and
//! reconcile result shards persisted to blob storage after the job handle
//! itself has expired.
//!
//! # Example
//!
//! ```no_run
//! use textor_client::AnalysisClient;
//! use textor_client::results::{self, GetResultOptions};
//! use textor_core::domain::job::AnalysisKind;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AnalysisClient::new("http://localhost:8080");
//!
//!     let merged = results::get_result(
//!         &client,
//!         AnalysisKind::TextDetection,
//!         "job-id",
//!         &GetResultOptions::default(),
//!     )
//!     .await?;
//!
//!     println!("{} blocks", merged.records("Blocks").len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod jobs;
pub mod merge;
pub mod results;
pub mod storage;
pub mod waiter;

// Re-export commonly used types
pub use api::{AnalysisApi, ObjectStore, StoredObject};
pub use error::{Error, Result};
pub use waiter::{PollAttempt, Waiter};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the document-analysis service API
///
/// This client implements the [`AnalysisApi`] seam over a JSON/HTTP
/// endpoint layout:
/// - Job submission (`start_job`)
/// - Paginated result retrieval (`get_page`)
///
/// Callers pointing at a different transport implement [`AnalysisApi`]
/// themselves; everything in [`results`] and [`storage`] is generic over
/// the trait, not this struct.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    /// Base URL of the analysis service (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl AnalysisClient {
    /// Create a new analysis client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the analysis service API
    ///
    /// # Example
    /// ```
    /// use textor_client::AnalysisClient;
    ///
    /// let client = AnalysisClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new analysis client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use textor_client::AnalysisClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = AnalysisClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the analysis service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::api_error(status.as_u16(), error_text));
        }

        Ok(response.json().await?)
    }
}
