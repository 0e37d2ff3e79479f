//! Executes one enrichment job against the catalog store

use std::sync::Arc;

use tracing::debug;

use crate::domain::enrichment::{EnrichmentClient, EnrichmentJob, JobOutcome, JobOutcomeSink};
use crate::domain::song::SongRepository;
use crate::domain::DomainError;

/// Runs enrichment jobs to completion: fetch derived attributes, then merge
/// them into the stored song. Every job ends in exactly one outcome report;
/// failures are terminal, never retried, and never mutate the store.
#[derive(Debug)]
pub struct EnrichmentWorker {
    client: Arc<dyn EnrichmentClient>,
    repository: Arc<dyn SongRepository>,
    sink: Arc<dyn JobOutcomeSink>,
}

impl EnrichmentWorker {
    pub fn new(
        client: Arc<dyn EnrichmentClient>,
        repository: Arc<dyn SongRepository>,
        sink: Arc<dyn JobOutcomeSink>,
    ) -> Self {
        Self {
            client,
            repository,
            sink,
        }
    }

    /// Runs one job to its terminal state and reports the outcome
    pub async fn run(&self, job: EnrichmentJob) {
        debug!(job_id = %job.id, song_id = %job.song_id, "enrichment job running");

        let outcome = match self.execute(&job).await {
            Ok(()) => JobOutcome::succeeded(job.id, job.song_id),
            Err(err) => JobOutcome::failed(job.id, job.song_id, err.to_string()),
        };

        self.sink.report(&outcome);
    }

    async fn execute(&self, job: &EnrichmentJob) -> Result<(), DomainError> {
        let attributes = self
            .client
            .fetch(job.song_id, &job.title, &job.artist)
            .await
            .map_err(|e| DomainError::provider("enrichment", e.to_string()))?;

        // Read-modify-write with no concurrency token: a concurrent edit of
        // the same song races this merge and the last writer wins.
        let mut song = self.repository.get(job.song_id).await?.ok_or_else(|| {
            DomainError::not_found(format!(
                "Song {} no longer exists in the catalog",
                job.song_id
            ))
        })?;

        song.apply_enrichment(attributes);
        self.repository.update(song).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::enrichment::client::mock::MockEnrichmentClient;
    use crate::domain::enrichment::job::mock::CollectingOutcomeSink;
    use crate::domain::enrichment::{EnrichmentError, JobId, JobStatus};
    use crate::domain::song::repository::mock::MockSongRepository;
    use crate::domain::song::{Song, SongDraft, SongId};

    fn song(id: u64, title: &str, artist: &str) -> Song {
        Song::from_draft(
            SongId::new(id),
            SongDraft {
                title: title.to_string(),
                artist: artist.to_string(),
                album: Some("Test Album".to_string()),
                genre: Some("Rock".to_string()),
                release_year: Some(1975),
            },
        )
    }

    fn job(id: u64, song_id: u64, title: &str, artist: &str) -> EnrichmentJob {
        EnrichmentJob {
            id: JobId::new(id),
            song_id: SongId::new(song_id),
            title: title.to_string(),
            artist: artist.to_string(),
            submitted_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_success_merges_attributes_and_preserves_fields() {
        let repository = Arc::new(
            MockSongRepository::new().with_song(song(1, "Bohemian Rhapsody", "Queen")),
        );
        let client = Arc::new(MockEnrichmentClient::with_sample_data());
        let sink = Arc::new(CollectingOutcomeSink::new());
        let worker = EnrichmentWorker::new(client, Arc::clone(&repository) as _, Arc::clone(&sink) as _);

        worker.run(job(1, 1, "Bohemian Rhapsody", "Queen")).await;

        let stored = repository.get(SongId::new(1)).await.unwrap().unwrap();
        let enriched = stored.enriched.expect("attributes merged");
        assert_eq!(enriched.bpm, 144);
        assert_eq!(enriched.mood, "Epic");
        assert_eq!(enriched.enriched_genre, "Progressive Rock");
        // Pre-existing fields survive the merge
        assert_eq!(stored.album.as_deref(), Some("Test Album"));
        assert_eq!(stored.genre.as_deref(), Some("Rock"));
        assert_eq!(stored.release_year, Some(1975));

        let outcomes = sink.outcomes();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].status, JobStatus::Succeeded);
        assert!(outcomes[0].error.is_none());
    }

    #[tokio::test]
    async fn test_provider_failure_leaves_store_untouched() {
        let repository =
            Arc::new(MockSongRepository::new().with_song(song(1, "Imagine", "John Lennon")));
        let client = Arc::new(
            MockEnrichmentClient::new()
                .with_error(EnrichmentError::provider_unavailable("connection refused")),
        );
        let sink = Arc::new(CollectingOutcomeSink::new());
        let worker = EnrichmentWorker::new(client, Arc::clone(&repository) as _, Arc::clone(&sink) as _);

        worker.run(job(1, 1, "Imagine", "John Lennon")).await;

        let stored = repository.get(SongId::new(1)).await.unwrap().unwrap();
        assert!(stored.enriched.is_none());

        let outcomes = sink.outcomes();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].status, JobStatus::Failed);
        assert!(outcomes[0]
            .error
            .as_deref()
            .unwrap()
            .contains("connection refused"));
    }

    #[tokio::test]
    async fn test_song_deleted_between_submit_and_run() {
        let repository = Arc::new(MockSongRepository::new());
        let client = Arc::new(MockEnrichmentClient::with_sample_data());
        let sink = Arc::new(CollectingOutcomeSink::new());
        let worker = EnrichmentWorker::new(client, repository as _, Arc::clone(&sink) as _);

        worker.run(job(1, 99, "Imagine", "John Lennon")).await;

        let outcomes = sink.outcomes();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].status, JobStatus::Failed);
        assert!(outcomes[0]
            .error
            .as_deref()
            .unwrap()
            .contains("no longer exists"));
    }

    #[tokio::test]
    async fn test_unknown_track_fails_job() {
        let repository =
            Arc::new(MockSongRepository::new().with_song(song(1, "Obscure B-Side", "Nobody")));
        let client = Arc::new(MockEnrichmentClient::with_sample_data());
        let sink = Arc::new(CollectingOutcomeSink::new());
        let worker = EnrichmentWorker::new(client, Arc::clone(&repository) as _, Arc::clone(&sink) as _);

        worker.run(job(1, 1, "Obscure B-Side", "Nobody")).await;

        let stored = repository.get(SongId::new(1)).await.unwrap().unwrap();
        assert!(stored.enriched.is_none());
        assert_eq!(sink.outcomes()[0].status, JobStatus::Failed);
    }
}
