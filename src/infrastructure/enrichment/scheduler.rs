//! Fire-and-forget dispatch of enrichment jobs

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, info, warn};

use crate::domain::enrichment::{EnrichmentJob, JobId};
use crate::domain::song::SongId;

use super::worker::EnrichmentWorker;

/// Accepts enrichment requests from the request path and hands them to
/// worker tasks without the submitter waiting on the work.
///
/// `submit` only registers the job on an unbounded channel; a dispatcher
/// task drains it and spawns one worker task per job. Jobs carry no
/// ordering guarantee relative to submission or to each other, duplicate
/// submissions for one song run independently (last write wins on the
/// store), and nothing is persisted: a restart drops queued and in-flight
/// jobs.
#[derive(Debug)]
pub struct EnrichmentScheduler {
    tx: mpsc::UnboundedSender<EnrichmentJob>,
    next_job_id: AtomicU64,
}

impl EnrichmentScheduler {
    /// Starts the dispatcher on the current runtime. With
    /// `max_concurrent_jobs` set, a semaphore caps how many workers run at
    /// once; by default concurrency is unbounded.
    pub fn start(worker: EnrichmentWorker, max_concurrent_jobs: Option<usize>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<EnrichmentJob>();
        let worker = Arc::new(worker);
        let limiter = max_concurrent_jobs.map(|n| Arc::new(Semaphore::new(n)));

        tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                let worker = Arc::clone(&worker);

                match &limiter {
                    Some(semaphore) => {
                        let permit = match Arc::clone(semaphore).acquire_owned().await {
                            Ok(permit) => permit,
                            Err(_) => break,
                        };
                        tokio::spawn(async move {
                            worker.run(job).await;
                            drop(permit);
                        });
                    }
                    None => {
                        tokio::spawn(async move {
                            worker.run(job).await;
                        });
                    }
                }
            }

            debug!("enrichment dispatcher stopped");
        });

        Self {
            tx,
            next_job_id: AtomicU64::new(1),
        }
    }

    /// Registers a job and returns immediately with its id. The caller has
    /// no channel to the job's outcome beyond re-reading the song or the
    /// outcome sink.
    pub fn submit(
        &self,
        song_id: SongId,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> JobId {
        let id = JobId::new(self.next_job_id.fetch_add(1, Ordering::Relaxed));
        let job = EnrichmentJob {
            id,
            song_id,
            title: title.into(),
            artist: artist.into(),
            submitted_at: Utc::now(),
        };

        info!(job_id = %id, song_id = %song_id, "enrichment job submitted");

        if self.tx.send(job).is_err() {
            // Only possible once the dispatcher has shut down
            warn!(job_id = %id, song_id = %song_id, "enrichment dispatcher gone, job dropped");
        }

        id
    }
}
