//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::enrichment::EnrichmentScheduler;
use crate::infrastructure::services::{LyricsService, SongService};

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub song_service: Arc<SongService>,
    pub lyrics_service: Arc<LyricsService>,
    pub enrichment_scheduler: Arc<EnrichmentScheduler>,
}

impl AppState {
    pub fn new(
        song_service: Arc<SongService>,
        lyrics_service: Arc<LyricsService>,
        enrichment_scheduler: Arc<EnrichmentScheduler>,
    ) -> Self {
        Self {
            song_service,
            lyrics_service,
            enrichment_scheduler,
        }
    }
}
