//! Collaborator interfaces
//!
//! The client layer is generic over two seams: the job-control API of the
//! analysis service ([`AnalysisApi`]) and the blob store it persists
//! result shards to ([`ObjectStore`]). [`crate::AnalysisClient`]
//! implements the former over HTTP, [`crate::storage::FsObjectStore`]
//! implements the latter over a local directory; tests substitute
//! in-memory fakes.
//!
//! Neither trait retries: transient transport failures propagate to the
//! caller unchanged. The only retry construct in this crate is the
//! [`crate::Waiter`].

use async_trait::async_trait;

use textor_core::domain::job::AnalysisKind;
use textor_core::domain::response::ResponseDocument;
use textor_core::dto::job::JobConfig;

use crate::error::Result;

/// Job-control operations on the analysis service.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Submit a new job; returns the opaque job id.
    async fn start_job(&self, kind: AnalysisKind, config: &JobConfig) -> Result<String>;

    /// Fetch one page of a job's results.
    ///
    /// `next_token` continues a previous page's pagination; `max_results`
    /// is a page-size hint the service may clamp.
    async fn get_page(
        &self,
        kind: AnalysisKind,
        job_id: &str,
        max_results: Option<u32>,
        next_token: Option<&str>,
    ) -> Result<ResponseDocument>;

    /// Probe a job's status.
    ///
    /// Same response shape as [`get_page`](Self::get_page); the default
    /// implementation fetches the first page with no size hint.
    async fn get_status(&self, kind: AnalysisKind, job_id: &str) -> Result<ResponseDocument> {
        self.get_page(kind, job_id, None, None).await
    }
}

/// One object listed under a storage prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Full key of the object within its bucket.
    pub key: String,
}

impl StoredObject {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Final path segment of the key.
    pub fn basename(&self) -> &str {
        self.key.rsplit('/').next().unwrap_or(&self.key)
    }
}

/// Read-only view of the blob store the service writes result shards to.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List the objects directly under `{bucket}/{prefix}`.
    async fn list(&self, bucket: &str, prefix: &str) -> Result<Vec<StoredObject>>;

    /// Read an object as UTF-8 text.
    async fn read_text(&self, bucket: &str, key: &str) -> Result<String>;
}
