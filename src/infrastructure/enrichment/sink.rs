//! Job outcome reporting via tracing

use tracing::{info, warn};

use crate::domain::enrichment::{JobOutcome, JobOutcomeSink, JobStatus};

/// Logs every terminal job outcome. This is the only place an enrichment
/// failure becomes visible; the submitting request returned long ago.
#[derive(Debug, Default)]
pub struct TracingOutcomeSink;

impl TracingOutcomeSink {
    pub fn new() -> Self {
        Self
    }
}

impl JobOutcomeSink for TracingOutcomeSink {
    fn report(&self, outcome: &JobOutcome) {
        match outcome.status {
            JobStatus::Succeeded => info!(
                job_id = %outcome.job_id,
                song_id = %outcome.song_id,
                finished_at = %outcome.finished_at,
                "enrichment job succeeded"
            ),
            _ => warn!(
                job_id = %outcome.job_id,
                song_id = %outcome.song_id,
                error = outcome.error.as_deref().unwrap_or("unknown"),
                finished_at = %outcome.finished_at,
                "enrichment job failed"
            ),
        }
    }
}
