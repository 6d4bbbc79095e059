//! Storage-side result reconciliation
//!
//! The service persists every page of a job's result to the caller's
//! output bucket as numbered JSON objects ("1", "2", ...) next to an
//! access-check marker object. The job handle expires after a few days;
//! the storage copy does not. This module rebuilds the exact document
//! [`crate::results::get_result`] would have produced, straight from
//! those objects.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use textor_core::domain::response::ResponseDocument;

use crate::api::{ObjectStore, StoredObject};
use crate::error::{Error, Result};
use crate::merge::merge_shards;

/// Marker object the service writes to verify it can reach the prefix.
/// Never a data shard.
pub const ACCESS_CHECK_MARKER: &str = ".s3_access_check";

/// Location of one job's result shards inside the output bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    pub bucket: String,
    /// Prefix of the shard objects, always ending in `/`.
    pub prefix: String,
}

impl std::fmt::Display for OutputLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.bucket, self.prefix)
    }
}

/// Compute where the service stored a job's result shards.
///
/// Pure and idempotent: a trailing `/` on `output_prefix` is normalized
/// away before joining, so `"p"` and `"p/"` yield the same location. The
/// inputs are the output bucket and prefix the job was submitted with,
/// plus the job id.
pub fn output_location(output_bucket: &str, output_prefix: &str, job_id: &str) -> OutputLocation {
    let output_prefix = output_prefix.strip_suffix('/').unwrap_or(output_prefix);
    OutputLocation {
        bucket: output_bucket.to_string(),
        prefix: format!("{output_prefix}/{job_id}/"),
    }
}

/// Rebuild a job's merged result from its stored shards.
///
/// Objects under the location are ordered by their numeric basename
/// (the listing order of the store is irrelevant) and merged exactly
/// like API pages; the access-check marker is skipped. Returns
/// `Ok(None)` when the prefix holds no shards.
///
/// # Errors
/// [`Error::MalformedShardName`] if a non-marker object's basename is not
/// a base-10 integer; the merge is abandoned with no partial result.
pub async fn merge_stored_result<S>(
    store: &S,
    location: &OutputLocation,
    payload_field: &str,
) -> Result<Option<ResponseDocument>>
where
    S: ObjectStore + ?Sized,
{
    let objects = store.list(&location.bucket, &location.prefix).await?;

    let mut shards: Vec<(u64, StoredObject)> = Vec::with_capacity(objects.len());
    for object in objects {
        if object.basename() == ACCESS_CHECK_MARKER {
            continue;
        }
        let ordinal: u64 = object
            .basename()
            .parse()
            .map_err(|_| Error::MalformedShardName {
                key: object.key.clone(),
            })?;
        shards.push((ordinal, object));
    }
    shards.sort_by_key(|(ordinal, _)| *ordinal);

    debug!(location = %location, shards = shards.len(), "merging stored result shards");

    let mut documents = Vec::with_capacity(shards.len());
    for (_, object) in &shards {
        let text = store.read_text(&location.bucket, &object.key).await?;
        documents.push(serde_json::from_str::<ResponseDocument>(&text)?);
    }
    Ok(merge_shards(documents, payload_field))
}

/// [`ObjectStore`] over a local directory tree.
///
/// Buckets are top-level subdirectories of the root; keys are paths below
/// the bucket. Useful against result sets synced down from the real
/// store.
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn list(&self, bucket: &str, prefix: &str) -> Result<Vec<StoredObject>> {
        let prefix = prefix.trim_end_matches('/');
        let dir = self.root.join(bucket).join(prefix);

        let mut objects = Vec::new();
        let mut entries = tokio::fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                let name = entry.file_name().to_string_lossy().into_owned();
                objects.push(StoredObject::new(format!("{prefix}/{name}")));
            }
        }
        Ok(objects)
    }

    async fn read_text(&self, bucket: &str, key: &str) -> Result<String> {
        Ok(tokio::fs::read_to_string(self.root.join(bucket).join(key)).await?)
    }
}
