//! Job domain types

use serde::{Deserialize, Serialize};

/// Lifecycle status of an asynchronous analysis job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    InProgress,
    Succeeded,
    Failed,
    PartialSuccess,
}

impl JobStatus {
    /// Wire name of this status, as the service reports it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::PartialSuccess => "PARTIAL_SUCCESS",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The asynchronous analysis operations offered by the service
///
/// Each kind returns its records under a different list field and has its
/// own server-side page-size ceiling, so both are captured here rather
/// than scattered through the client layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisKind {
    DocumentAnalysis,
    TextDetection,
    ExpenseAnalysis,
    LendingAnalysis,
}

impl AnalysisKind {
    /// Name of the list field carrying this kind's result records.
    pub fn payload_field(&self) -> &'static str {
        match self {
            Self::DocumentAnalysis | Self::TextDetection => "Blocks",
            Self::ExpenseAnalysis => "ExpenseDocuments",
            Self::LendingAnalysis => "Results",
        }
    }

    /// Page-size hint used when the caller does not supply one.
    pub fn default_page_size(&self) -> u32 {
        match self {
            Self::DocumentAnalysis | Self::TextDetection => 1000,
            Self::ExpenseAnalysis => 20,
            Self::LendingAnalysis => 30,
        }
    }

    /// URL path segment identifying this kind on the service API.
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::DocumentAnalysis => "document-analysis",
            Self::TextDetection => "text-detection",
            Self::ExpenseAnalysis => "expense-analysis",
            Self::LendingAnalysis => "lending-analysis",
        }
    }
}

impl std::fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path())
    }
}
