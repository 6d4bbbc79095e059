//! Job-related API endpoints and submission helpers

use async_trait::async_trait;
use uuid::Uuid;

use textor_core::domain::job::AnalysisKind;
use textor_core::domain::response::ResponseDocument;
use textor_core::dto::job::{
    DocumentLocation, JobConfig, OutputConfig, S3Object, StartJobResponse,
};

use crate::AnalysisClient;
use crate::api::AnalysisApi;
use crate::error::{Error, Result};

/// Build the document-location and output-config descriptors for a new
/// job.
///
/// The input key must name an object, not a "directory": a trailing `/`
/// is rejected as ambiguous. A trailing `/` on the output prefix is
/// stripped so the shard paths do not grow an empty segment.
///
/// # Arguments
/// * `input_bucket` - bucket holding the document to analyze
/// * `input_key` - key of the document
/// * `input_version` - version id, when the bucket is versioned
/// * `output_bucket` - bucket the service writes result shards to
/// * `output_prefix` - prefix for the result shards, without trailing `/`
pub fn job_io_config(
    input_bucket: &str,
    input_key: &str,
    input_version: Option<&str>,
    output_bucket: &str,
    output_prefix: &str,
) -> Result<(DocumentLocation, OutputConfig)> {
    if input_key.ends_with('/') {
        return Err(Error::InvalidArgument(format!(
            "input key {input_key:?} must not end with '/'"
        )));
    }
    let output_prefix = output_prefix.strip_suffix('/').unwrap_or(output_prefix);

    let document_location = DocumentLocation {
        s3_object: S3Object {
            bucket: input_bucket.to_string(),
            name: input_key.to_string(),
            version: input_version.map(str::to_owned),
        },
    };
    let output_config = OutputConfig {
        s3_bucket: output_bucket.to_string(),
        s3_prefix: output_prefix.to_string(),
    };
    Ok((document_location, output_config))
}

impl AnalysisClient {
    /// Submit a new analysis job
    ///
    /// An idempotency token is generated when the config does not carry
    /// one, so a retried submission cannot start a duplicate job.
    ///
    /// # Arguments
    /// * `kind` - Which analysis operation to start
    /// * `config` - The job configuration
    ///
    /// # Returns
    /// The opaque job id used by all later result calls
    pub async fn start_job(&self, kind: AnalysisKind, config: &JobConfig) -> Result<String> {
        let url = format!("{}/api/analyses/{}", self.base_url(), kind.as_path());

        let mut config = config.clone();
        if config.client_request_token.is_none() {
            config.client_request_token = Some(Uuid::new_v4().to_string());
        }

        let response = self.client.post(&url).json(&config).send().await?;

        let started: StartJobResponse = self.handle_response(response).await?;
        Ok(started.job_id)
    }

    /// Fetch one page of a job's results
    ///
    /// # Arguments
    /// * `kind` - Which analysis operation the job belongs to
    /// * `job_id` - The job id returned by [`start_job`](Self::start_job)
    /// * `max_results` - Page-size hint, if any
    /// * `next_token` - Continuation token from the previous page, if any
    pub async fn get_page(
        &self,
        kind: AnalysisKind,
        job_id: &str,
        max_results: Option<u32>,
        next_token: Option<&str>,
    ) -> Result<ResponseDocument> {
        let url = format!(
            "{}/api/analyses/{}/{}",
            self.base_url(),
            kind.as_path(),
            job_id
        );

        let mut request = self.client.get(&url);
        if let Some(max_results) = max_results {
            request = request.query(&[("MaxResults", max_results.to_string())]);
        }
        if let Some(next_token) = next_token {
            request = request.query(&[("NextToken", next_token)]);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }
}

#[async_trait]
impl AnalysisApi for AnalysisClient {
    async fn start_job(&self, kind: AnalysisKind, config: &JobConfig) -> Result<String> {
        AnalysisClient::start_job(self, kind, config).await
    }

    async fn get_page(
        &self,
        kind: AnalysisKind,
        job_id: &str,
        max_results: Option<u32>,
        next_token: Option<&str>,
    ) -> Result<ResponseDocument> {
        AnalysisClient::get_page(self, kind, job_id, max_results, next_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_ending_in_separator_is_rejected() {
        let err = job_io_config("in", "folder/", None, "out", "results").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_output_prefix_trailing_separator_is_stripped() {
        let (_, output_config) =
            job_io_config("in", "folder/doc.pdf", None, "out", "results/").unwrap();
        assert_eq!(output_config.s3_prefix, "results");

        let (_, unchanged) =
            job_io_config("in", "folder/doc.pdf", None, "out", "results").unwrap();
        assert_eq!(unchanged.s3_prefix, "results");
    }

    #[test]
    fn test_version_is_carried_through() {
        let (document_location, _) =
            job_io_config("in", "doc.pdf", Some("v3"), "out", "results").unwrap();
        assert_eq!(document_location.s3_object.bucket, "in");
        assert_eq!(document_location.s3_object.name, "doc.pdf");
        assert_eq!(document_location.s3_object.version.as_deref(), Some("v3"));
    }
}
