//! HTTP client for the external enrichment provider
//!
//! Wire contract: `POST {base_url}/enrich` with `{"song_id", "title",
//! "artist"}` answers 200 with `{"bpm", "mood", "enriched_genre"}`, or 404
//! when the provider knows nothing about the track.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::enrichment::{EnrichmentClient, EnrichmentError};
use crate::domain::song::{EnrichedAttributes, SongId};

#[derive(Debug, Serialize)]
struct EnrichmentRequestBody<'a> {
    song_id: u64,
    title: &'a str,
    artist: &'a str,
}

#[derive(Debug, Deserialize)]
struct EnrichmentPayload {
    bpm: u32,
    mood: String,
    enriched_genre: String,
}

/// Real enrichment provider client using reqwest.
///
/// No request timeout is applied here; the pipeline promises none, and any
/// bound belongs to the deployment's network layer.
#[derive(Debug, Clone)]
pub struct HttpEnrichmentClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEnrichmentClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl EnrichmentClient for HttpEnrichmentClient {
    async fn fetch(
        &self,
        song_id: SongId,
        title: &str,
        artist: &str,
    ) -> Result<EnrichedAttributes, EnrichmentError> {
        let url = format!("{}/enrich", self.base_url.trim_end_matches('/'));
        debug!(%url, %song_id, "requesting enrichment from provider");

        let response = self
            .client
            .post(&url)
            .json(&EnrichmentRequestBody {
                song_id: song_id.value(),
                title,
                artist,
            })
            .send()
            .await
            .map_err(|e| EnrichmentError::provider_unavailable(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(EnrichmentError::not_found(title, artist));
        }

        if !response.status().is_success() {
            return Err(EnrichmentError::provider_unavailable(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let payload: EnrichmentPayload = response
            .json()
            .await
            .map_err(|e| EnrichmentError::invalid_response(e.to_string()))?;

        Ok(EnrichedAttributes {
            bpm: payload.bpm,
            mood: payload.mood,
            enriched_genre: payload.enriched_genre,
        })
    }
}
