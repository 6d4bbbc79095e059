//! Textor Core
//!
//! Core types for the textor document-analysis client toolkit.
//!
//! This crate contains:
//! - Domain types: job statuses, analysis kinds, the typed block model
//! - DTOs: payloads exchanged with the analysis service (job submission,
//!   completion notifications)

pub mod domain;
pub mod dto;
