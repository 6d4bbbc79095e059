//! Data transfer objects
//!
//! Payloads exchanged with the analysis service: job submission requests
//! and the completion notifications it publishes. Field names follow the
//! service's wire shape.

pub mod job;
