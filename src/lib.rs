//! Tunedex
//!
//! A music catalog service with:
//! - Song CRUD and search over an in-memory store
//! - Lyrics lookup shielded by a TTL lookaside cache
//! - Fire-and-forget background enrichment jobs

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use domain::song::{InMemorySongRepository, SongRepository};
use infrastructure::enrichment::{
    EnrichmentScheduler, EnrichmentWorker, HttpEnrichmentClient, TracingOutcomeSink,
};
use infrastructure::lyrics::LyricsOvhClient;
use infrastructure::services::{LyricsCacheConfig, LyricsService, SongService};

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> AppState {
    let repository: Arc<dyn SongRepository> = Arc::new(InMemorySongRepository::new());

    let song_service = Arc::new(SongService::new(Arc::clone(&repository)));

    let lyrics_client = Arc::new(LyricsOvhClient::new(
        &config.lyrics.base_url,
        Duration::from_millis(config.lyrics.timeout_ms),
    ));
    let lyrics_service = Arc::new(LyricsService::with_config(
        lyrics_client,
        LyricsCacheConfig {
            capacity: config.lyrics.cache_capacity,
            ttl: Duration::from_secs(config.lyrics.cache_ttl_secs),
        },
    ));

    let enrichment_client = Arc::new(HttpEnrichmentClient::new(&config.enrichment.base_url));
    let worker = EnrichmentWorker::new(
        enrichment_client,
        Arc::clone(&repository),
        Arc::new(TracingOutcomeSink::new()),
    );
    let scheduler = Arc::new(EnrichmentScheduler::start(
        worker,
        config.enrichment.max_concurrent_jobs,
    ));

    AppState::new(song_service, lyrics_service, scheduler)
}
