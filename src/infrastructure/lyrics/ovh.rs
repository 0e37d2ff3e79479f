//! HTTP client for the lyrics.ovh API
//!
//! Wire contract: `GET {base_url}/v1/{artist}/{title}` answers 200 with
//! `{"lyrics": "..."}` for a hit, and 404 or `{"error": "..."}` when the
//! song is unknown.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::domain::lyrics::{LookupError, LyricsClient};

#[derive(Debug, Deserialize)]
struct LyricsPayload {
    lyrics: Option<String>,
    error: Option<String>,
}

/// Real lyrics.ovh client using reqwest
#[derive(Debug, Clone)]
pub struct LyricsOvhClient {
    client: reqwest::Client,
    base_url: String,
}

impl LyricsOvhClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    fn lookup_url(&self, title: &str, artist: &str) -> String {
        format!(
            "{}/v1/{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(artist.trim()),
            urlencoding::encode(title.trim()),
        )
    }
}

#[async_trait]
impl LyricsClient for LyricsOvhClient {
    async fn fetch(&self, title: &str, artist: &str) -> Result<String, LookupError> {
        let url = self.lookup_url(title, artist);
        debug!(%url, "fetching lyrics from provider");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::provider_unavailable(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(LookupError::not_found(title, artist));
        }

        if !response.status().is_success() {
            return Err(LookupError::provider_unavailable(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let payload: LyricsPayload = response
            .json()
            .await
            .map_err(|e| LookupError::invalid_response(e.to_string()))?;

        if let Some(lyrics) = payload.lyrics {
            return Ok(lyrics);
        }

        if payload.error.is_some() {
            return Err(LookupError::not_found(title, artist));
        }

        Err(LookupError::invalid_response(
            "response carried neither 'lyrics' nor 'error'",
        ))
    }
}
