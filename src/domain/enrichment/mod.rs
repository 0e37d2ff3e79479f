//! Enrichment domain: client trait, job lifecycle, outcome sink

pub mod client;
pub mod job;

pub use client::{EnrichmentClient, EnrichmentError};
pub use job::{EnrichmentJob, JobId, JobOutcome, JobOutcomeSink, JobStatus};
