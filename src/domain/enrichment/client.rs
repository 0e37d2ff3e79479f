//! Enrichment provider client trait and error taxonomy

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::song::{EnrichedAttributes, SongId};

/// Errors surfaced by an enrichment fetch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrichmentError {
    /// The provider has no derived attributes for this song
    #[error("no enrichment data for '{title}' by '{artist}'")]
    NotFound { title: String, artist: String },

    /// Network or protocol failure reaching the provider
    #[error("enrichment provider unavailable: {message}")]
    ProviderUnavailable { message: String },

    /// The provider answered with a payload we cannot interpret
    #[error("invalid response from enrichment provider: {message}")]
    InvalidResponse { message: String },
}

impl EnrichmentError {
    pub fn not_found(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self::NotFound {
            title: title.into(),
            artist: artist.into(),
        }
    }

    pub fn provider_unavailable(message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

/// Client for an external metadata enrichment provider. Pure I/O boundary:
/// one outbound call per invocation, no internal retry and no state.
#[async_trait]
pub trait EnrichmentClient: Send + Sync + std::fmt::Debug {
    async fn fetch(
        &self,
        song_id: SongId,
        title: &str,
        artist: &str,
    ) -> Result<EnrichedAttributes, EnrichmentError>;
}

#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;

    /// Mock enrichment client backed by a static table, with optional
    /// latency and error injection.
    #[derive(Debug, Default)]
    pub struct MockEnrichmentClient {
        attributes: Mutex<HashMap<(String, String), EnrichedAttributes>>,
        error: Mutex<Option<EnrichmentError>>,
        calls: AtomicUsize,
        delay: Option<Duration>,
    }

    impl MockEnrichmentClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// A client preloaded with a few well-known tracks
        pub fn with_sample_data() -> Self {
            Self::new()
                .with_attributes("Bohemian Rhapsody", "Queen", 144, "Epic", "Progressive Rock")
                .with_attributes("Imagine", "John Lennon", 75, "Peaceful", "Soft Rock")
                .with_attributes("Billie Jean", "Michael Jackson", 117, "Funky", "Pop/R&B")
        }

        pub fn with_attributes(
            self,
            title: &str,
            artist: &str,
            bpm: u32,
            mood: &str,
            enriched_genre: &str,
        ) -> Self {
            self.attributes.lock().unwrap().insert(
                (title.trim().to_lowercase(), artist.trim().to_lowercase()),
                EnrichedAttributes {
                    bpm,
                    mood: mood.to_string(),
                    enriched_genre: enriched_genre.to_string(),
                },
            );
            self
        }

        pub fn with_error(self, error: EnrichmentError) -> Self {
            *self.error.lock().unwrap() = Some(error);
            self
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EnrichmentClient for MockEnrichmentClient {
        async fn fetch(
            &self,
            _song_id: SongId,
            title: &str,
            artist: &str,
        ) -> Result<EnrichedAttributes, EnrichmentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            if let Some(error) = self.error.lock().unwrap().clone() {
                return Err(error);
            }

            self.attributes
                .lock()
                .unwrap()
                .get(&(title.trim().to_lowercase(), artist.trim().to_lowercase()))
                .cloned()
                .ok_or_else(|| EnrichmentError::not_found(title, artist))
        }
    }
}
