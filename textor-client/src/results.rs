//! Result retrieval and job-wait helpers
//!
//! The paginated result API needs a live job id, and job ids expire a few
//! days after completion. [`get_result`] drives that API while the handle
//! is valid; [`crate::storage::merge_stored_result`] rebuilds the same
//! document from the storage copy once it is not.

use std::time::Duration;

use tracing::debug;

use textor_core::domain::job::{AnalysisKind, JobStatus};
use textor_core::domain::response::ResponseDocument;

use crate::api::AnalysisApi;
use crate::error::{Error, Result};
use crate::merge::merge_shards;
use crate::waiter::Waiter;

/// Options for [`get_result`].
#[derive(Debug, Clone)]
pub struct GetResultOptions {
    /// Page-size hint; `None` uses the kind's default.
    pub max_results: Option<u32>,
    /// Follow continuation tokens through to the last page. When false,
    /// the first page is returned as-is, cursor intact.
    pub all_pages: bool,
}

impl Default for GetResultOptions {
    fn default() -> Self {
        Self {
            max_results: None,
            all_pages: true,
        }
    }
}

/// Fetch a job's results, merging every page into one document.
///
/// Pages are requested with no token, then chained through each page's
/// continuation token until the service stops returning one. The merged
/// document carries the first page's scalar fields, the concatenation of
/// all pages' records, and no cursor.
pub async fn get_result<A>(
    api: &A,
    kind: AnalysisKind,
    job_id: &str,
    options: &GetResultOptions,
) -> Result<ResponseDocument>
where
    A: AnalysisApi + ?Sized,
{
    let max_results = options.max_results.unwrap_or_else(|| kind.default_page_size());

    let mut pages: Vec<ResponseDocument> = Vec::new();
    let mut next_token: Option<String> = None;

    loop {
        let page = api
            .get_page(kind, job_id, Some(max_results), next_token.as_deref())
            .await?;
        if !options.all_pages {
            return Ok(page);
        }

        next_token = page.next_token().map(str::to_owned);
        pages.push(page);
        debug!(job_id, pages = pages.len(), "fetched result page");

        if next_token.is_none() {
            break;
        }
    }

    // at least one page was pushed before the loop broke
    Ok(merge_shards(pages, kind.payload_field()).unwrap_or_default())
}

/// Options for [`wait_for_completion`].
#[derive(Debug, Clone)]
pub struct WaitOptions {
    /// Delay between status probes.
    pub delay: Duration,
    /// Total time budget for the wait.
    pub timeout: Duration,
    /// Progress line on stdout after each delay.
    pub verbose: bool,
    /// Indentation of the progress line.
    pub indent: usize,
    /// Statuses that complete the wait successfully.
    pub success_statuses: Vec<JobStatus>,
    /// Statuses that fail the wait immediately.
    ///
    /// `PartialSuccess` is in neither set by default, so the wait keeps
    /// polling through it; move it into either set to make it terminal.
    pub failure_statuses: Vec<JobStatus>,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(5),
            timeout: Duration::from_secs(60),
            verbose: true,
            indent: 0,
            success_statuses: vec![JobStatus::Succeeded],
            failure_statuses: vec![JobStatus::Failed],
        }
    }
}

/// Poll a job until it reaches a terminal status.
///
/// Returns the last probe response once a success status is observed.
///
/// # Errors
/// * [`Error::JobFailed`] carrying the last response, on a failure status
/// * [`Error::Timeout`] from the underlying [`Waiter`], unchanged
/// * any error from the caller's probe, unchanged and immediately
pub async fn wait_for_completion<A>(
    api: &A,
    kind: AnalysisKind,
    job_id: &str,
    options: &WaitOptions,
) -> Result<ResponseDocument>
where
    A: AnalysisApi + ?Sized,
{
    let mut waiter = Waiter::new(options.delay, options.timeout)
        .verbose(options.verbose)
        .indent(options.indent);

    loop {
        let attempt = waiter.next_attempt().await?;
        let response = api.get_status(kind, job_id).await?;

        match response.job_status() {
            Some(status) if options.success_statuses.contains(&status) => {
                debug!(job_id, %status, attempt = attempt.attempt, "job completed");
                if options.verbose {
                    println!();
                }
                return Ok(response);
            }
            Some(status) if options.failure_statuses.contains(&status) => {
                return Err(Error::JobFailed {
                    status,
                    response: Box::new(response),
                });
            }
            status => {
                debug!(job_id, ?status, attempt = attempt.attempt, "job not finished");
            }
        }
    }
}
