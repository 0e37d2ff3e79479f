//! Enrichment job lifecycle types

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::song::SongId;

/// Identifier for one submitted enrichment job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobId(u64);

impl JobId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One enrichment request, carrying the identifying data known at
/// submission time. Jobs live only in memory; a process restart loses
/// queued and in-flight jobs.
#[derive(Debug, Clone)]
pub struct EnrichmentJob {
    pub id: JobId,
    pub song_id: SongId,
    pub title: String,
    pub artist: String,
    pub submitted_at: DateTime<Utc>,
}

/// Job lifecycle: `Pending -> Running -> {Succeeded, Failed}`, terminal
/// states only. There is no retrying state; every failure is final for
/// that job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Terminal outcome record for one job, reported exactly once to the
/// outcome sink. The submitting caller has already returned by the time
/// this exists; the sink is the only place a failure becomes visible.
#[derive(Debug, Clone, Serialize)]
pub struct JobOutcome {
    pub job_id: JobId,
    pub song_id: SongId,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub finished_at: DateTime<Utc>,
}

impl JobOutcome {
    pub fn succeeded(job_id: JobId, song_id: SongId) -> Self {
        Self {
            job_id,
            song_id,
            status: JobStatus::Succeeded,
            error: None,
            finished_at: Utc::now(),
        }
    }

    pub fn failed(job_id: JobId, song_id: SongId, error: impl Into<String>) -> Self {
        Self {
            job_id,
            song_id,
            status: JobStatus::Failed,
            error: Some(error.into()),
            finished_at: Utc::now(),
        }
    }
}

/// Sink for terminal job outcomes
pub trait JobOutcomeSink: Send + Sync + std::fmt::Debug {
    fn report(&self, outcome: &JobOutcome);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(JobStatus::Succeeded.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
    }

    #[test]
    fn test_outcome_constructors() {
        let ok = JobOutcome::succeeded(JobId::new(1), SongId::new(42));
        assert_eq!(ok.status, JobStatus::Succeeded);
        assert!(ok.error.is_none());

        let failed = JobOutcome::failed(JobId::new(2), SongId::new(42), "provider unavailable");
        assert_eq!(failed.status, JobStatus::Failed);
        assert_eq!(failed.error.as_deref(), Some("provider unavailable"));
    }
}
