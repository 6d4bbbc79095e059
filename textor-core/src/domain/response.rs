//! Raw response documents
//!
//! The service's result pages are loosely-shaped JSON objects whose
//! interesting fields vary by analysis kind. [`ResponseDocument`] keeps
//! the raw object intact (so merging and re-serialization are lossless)
//! and layers typed accessors over the fields the client code reads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::block::Block;
use super::job::JobStatus;

/// One page of a job's results, or the merged union of all pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseDocument(Map<String, Value>);

impl ResponseDocument {
    /// An empty document.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Raw field lookup.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Job status reported by the service, if the document carries one.
    pub fn job_status(&self) -> Option<JobStatus> {
        serde_json::from_value(self.get("JobStatus")?.clone()).ok()
    }

    /// Human-readable detail accompanying a FAILED or partial status.
    pub fn status_message(&self) -> Option<&str> {
        self.get("StatusMessage")?.as_str()
    }

    /// Pagination cursor for the next page, if more results remain.
    pub fn next_token(&self) -> Option<&str> {
        self.get("NextToken")?.as_str()
    }

    /// Records under the designated list field. An absent field reads as
    /// an empty list.
    pub fn records(&self, field: &str) -> &[Value] {
        self.get(field)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Typed view of the "Blocks" payload.
    pub fn blocks(&self) -> Result<Vec<Block>, serde_json::Error> {
        self.records("Blocks")
            .iter()
            .cloned()
            .map(serde_json::from_value)
            .collect()
    }

    /// Total page count from the document metadata, if present.
    pub fn document_pages(&self) -> Option<u64> {
        self.get("DocumentMetadata")?.get("Pages")?.as_u64()
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the wrapper, returning the underlying JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ResponseDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::block::BlockType;

    fn sample() -> ResponseDocument {
        serde_json::from_value(serde_json::json!({
            "DocumentMetadata": {"Pages": 2},
            "JobStatus": "SUCCEEDED",
            "Blocks": [
                {"Id": "b1", "BlockType": "PAGE", "Page": 1},
                {"Id": "b2", "BlockType": "LINE", "Text": "hi", "Page": 1}
            ],
            "NextToken": "token-2"
        }))
        .unwrap()
    }

    #[test]
    fn test_typed_accessors() {
        let doc = sample();
        assert_eq!(doc.job_status(), Some(JobStatus::Succeeded));
        assert_eq!(doc.next_token(), Some("token-2"));
        assert_eq!(doc.document_pages(), Some(2));
        assert_eq!(doc.records("Blocks").len(), 2);

        let blocks = doc.blocks().unwrap();
        assert_eq!(blocks[0].block_type, BlockType::Page);
        assert_eq!(blocks[1].text.as_deref(), Some("hi"));
    }

    #[test]
    fn test_absent_fields_read_as_empty() {
        let doc = ResponseDocument::new();
        assert!(doc.job_status().is_none());
        assert!(doc.next_token().is_none());
        assert!(doc.records("Blocks").is_empty());
        assert!(doc.blocks().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_status_is_none() {
        let doc: ResponseDocument =
            serde_json::from_value(serde_json::json!({"JobStatus": "EXPLODED"})).unwrap();
        assert!(doc.job_status().is_none());
    }
}
