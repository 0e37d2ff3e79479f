//! Lyrics lookup endpoint

use axum::extract::{Path, State};
use serde::Serialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

/// Lyrics for a catalog song
#[derive(Debug, Clone, Serialize)]
pub struct LyricsResponse {
    pub song_id: u64,
    pub title: String,
    pub artist: String,
    pub lyrics: String,
}

/// GET /songs/{id}/lyrics - fetch lyrics for a catalog song
///
/// The song must exist in the catalog; its title and artist drive the
/// provider lookup. Cached answers are served without touching the
/// provider.
pub async fn get_lyrics(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<LyricsResponse>, ApiError> {
    let song = state.song_service.get_required(id).await?;

    debug!(song_id = id, title = %song.title, "looking up lyrics");
    let lyrics = state
        .lyrics_service
        .lookup(&song.title, &song.artist)
        .await?;

    Ok(Json(LyricsResponse {
        song_id: song.id.value(),
        title: song.title,
        artist: song.artist,
        lyrics,
    }))
}
