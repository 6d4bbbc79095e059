//! Job submission and notification DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::job::JobStatus;

/// Reference to a stored object, optionally pinned to a version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Object {
    pub bucket: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Where the document to analyze lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentLocation {
    pub s3_object: S3Object,
}

/// Where the service should persist the job's result shards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    pub s3_bucket: String,
    pub s3_prefix: String,
}

/// Topic the service publishes a [`JobNotification`] to on completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationChannel {
    #[serde(rename = "SNSTopicArn")]
    pub sns_topic_arn: String,
    pub role_arn: String,
}

/// Feature toggles for document-analysis jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    Tables,
    Forms,
    Queries,
    Signatures,
    Layout,
}

/// Everything needed to submit a new analysis job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobConfig {
    pub document_location: DocumentLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_config: Option<OutputConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feature_types: Vec<FeatureType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_channel: Option<NotificationChannel>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "KMSKeyId")]
    pub kms_key_id: Option<String>,
}

impl JobConfig {
    /// A minimal config: analyze the given document, everything else off.
    pub fn new(document_location: DocumentLocation) -> Self {
        Self {
            document_location,
            output_config: None,
            feature_types: Vec::new(),
            client_request_token: None,
            job_tag: None,
            notification_channel: None,
            kms_key_id: None,
        }
    }
}

/// Response to a job submission: the opaque handle for all later calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartJobResponse {
    pub job_id: String,
}

/// Document reference carried inside a [`JobNotification`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationLocation {
    pub s3_bucket: String,
    pub s3_object_name: String,
}

/// Completion event published by the service when an async job finishes.
///
/// The `job_tag` round-trips whatever the caller set in [`JobConfig`];
/// small payloads can ride on it directly, larger ones should be stored
/// elsewhere and referenced by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobNotification {
    pub job_id: String,
    pub status: JobStatus,
    #[serde(rename = "API")]
    pub api: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_tag: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub document_location: NotificationLocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_job_config_shape() {
        let config = JobConfig::new(DocumentLocation {
            s3_object: S3Object {
                bucket: "in-bucket".to_string(),
                name: "folder/doc.pdf".to_string(),
                version: None,
            },
        });

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["DocumentLocation"]["S3Object"]["Bucket"], "in-bucket");
        assert_eq!(
            value["DocumentLocation"]["S3Object"]["Name"],
            "folder/doc.pdf"
        );
        // unset options stay off the wire entirely
        assert!(value["DocumentLocation"]["S3Object"].get("Version").is_none());
        assert!(value.get("OutputConfig").is_none());
        assert!(value.get("FeatureTypes").is_none());
    }

    #[test]
    fn test_feature_types_wire_names() {
        let mut config = JobConfig::new(DocumentLocation {
            s3_object: S3Object {
                bucket: "b".to_string(),
                name: "k".to_string(),
                version: Some("v7".to_string()),
            },
        });
        config.feature_types = vec![FeatureType::Tables, FeatureType::Layout];

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["FeatureTypes"][0], "TABLES");
        assert_eq!(value["FeatureTypes"][1], "LAYOUT");
        assert_eq!(value["DocumentLocation"]["S3Object"]["Version"], "v7");
    }

    #[test]
    fn test_notification_parses() {
        let notification: JobNotification = serde_json::from_value(serde_json::json!({
            "JobId": "job-123",
            "Status": "SUCCEEDED",
            "API": "StartDocumentAnalysis",
            "JobTag": "invoice-42",
            "Timestamp": 1_700_000_000_000u64,
            "DocumentLocation": {
                "S3Bucket": "in-bucket",
                "S3ObjectName": "folder/doc.pdf"
            }
        }))
        .unwrap();

        assert_eq!(notification.job_id, "job-123");
        assert_eq!(notification.status, JobStatus::Succeeded);
        assert_eq!(notification.api, "StartDocumentAnalysis");
        assert_eq!(notification.job_tag.as_deref(), Some("invoice-42"));
        assert_eq!(notification.timestamp.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(notification.document_location.s3_bucket, "in-bucket");
    }

    #[test]
    fn test_notification_channel_topic_rename() {
        let channel = NotificationChannel {
            sns_topic_arn: "arn:topic".to_string(),
            role_arn: "arn:role".to_string(),
        };
        let value = serde_json::to_value(&channel).unwrap();
        assert_eq!(value["SNSTopicArn"], "arn:topic");
        assert_eq!(value["RoleArn"], "arn:role");
    }
}
