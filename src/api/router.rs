use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::enrichment;
use super::health;
use super::lyrics;
use super::songs;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Catalog CRUD and search
        .route("/songs", get(songs::list_songs).post(songs::create_song))
        .route(
            "/songs/{id}",
            get(songs::get_song)
                .put(songs::replace_song)
                .patch(songs::patch_song)
                .delete(songs::delete_song),
        )
        // Lyrics lookup
        .route("/songs/{id}/lyrics", get(lyrics::get_lyrics))
        // Background enrichment
        .route("/songs/{id}/enrich", post(enrichment::enrich_song))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
