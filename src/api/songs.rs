//! Song catalog endpoints

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::song::{SearchCriteria, Song, SongUpdate};
use crate::infrastructure::services::CreateSongRequest;

/// Request to create or replace a song
#[derive(Debug, Clone, Deserialize)]
pub struct SongApiRequest {
    /// Omitted or 0 means the catalog assigns the next free id
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
}

impl From<SongApiRequest> for CreateSongRequest {
    fn from(req: SongApiRequest) -> Self {
        CreateSongRequest {
            id: req.id,
            title: req.title,
            artist: req.artist,
            album: req.album,
            genre: req.genre,
            release_year: req.release_year,
        }
    }
}

/// Partial update request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchSongApiRequest {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
}

impl From<PatchSongApiRequest> for SongUpdate {
    fn from(req: PatchSongApiRequest) -> Self {
        SongUpdate {
            title: req.title,
            artist: req.artist,
            album: req.album,
            genre: req.genre,
            release_year: req.release_year,
        }
    }
}

/// Search filters taken from query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
}

impl From<SearchQuery> for SearchCriteria {
    fn from(query: SearchQuery) -> Self {
        SearchCriteria {
            title: query.title,
            artist: query.artist,
            album: query.album,
            genre: query.genre,
            release_year: query.release_year,
        }
    }
}

/// Song representation returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct SongResponse {
    pub id: u64,
    pub title: String,
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpm: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enriched_genre: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Song> for SongResponse {
    fn from(song: &Song) -> Self {
        let enriched = song.enriched.as_ref();
        Self {
            id: song.id.value(),
            title: song.title.clone(),
            artist: song.artist.clone(),
            album: song.album.clone(),
            genre: song.genre.clone(),
            release_year: song.release_year,
            bpm: enriched.map(|e| e.bpm),
            mood: enriched.map(|e| e.mood.clone()),
            enriched_genre: enriched.map(|e| e.enriched_genre.clone()),
            created_at: song.created_at.to_rfc3339(),
            updated_at: song.updated_at.to_rfc3339(),
        }
    }
}

/// List songs response
#[derive(Debug, Clone, Serialize)]
pub struct ListSongsResponse {
    pub songs: Vec<SongResponse>,
    pub total: usize,
}

/// GET /songs - list songs, optionally filtered by query parameters
pub async fn list_songs(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ListSongsResponse>, ApiError> {
    let criteria: SearchCriteria = query.into();
    debug!(?criteria, "listing songs");

    let songs = state.song_service.search(&criteria).await?;
    let songs: Vec<SongResponse> = songs.iter().map(SongResponse::from).collect();
    let total = songs.len();

    Ok(Json(ListSongsResponse { songs, total }))
}

/// GET /songs/{id} - fetch a single song
pub async fn get_song(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<SongResponse>, ApiError> {
    let song = state.song_service.get_required(id).await?;
    Ok(Json(SongResponse::from(&song)))
}

/// POST /songs - create a song
pub async fn create_song(
    State(state): State<AppState>,
    Json(request): Json<SongApiRequest>,
) -> Result<(StatusCode, Json<SongResponse>), ApiError> {
    let song = state.song_service.create(request.into()).await?;

    info!(song_id = %song.id, title = %song.title, "song created");
    Ok((StatusCode::CREATED, Json(SongResponse::from(&song))))
}

/// PUT /songs/{id} - replace a song's fields
pub async fn replace_song(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<SongApiRequest>,
) -> Result<Json<SongResponse>, ApiError> {
    if let Some(body_id) = request.id {
        if body_id != 0 && body_id != id {
            return Err(ApiError::bad_request(format!(
                "Body id {} does not match path id {}",
                body_id, id
            ))
            .with_param("id"));
        }
    }

    let song = state.song_service.replace(id, request.into()).await?;

    info!(song_id = %song.id, "song replaced");
    Ok(Json(SongResponse::from(&song)))
}

/// PATCH /songs/{id} - partially update a song
pub async fn patch_song(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<PatchSongApiRequest>,
) -> Result<Json<SongResponse>, ApiError> {
    let update: SongUpdate = request.into();
    if update.is_empty() {
        return Err(ApiError::bad_request("No fields to update"));
    }

    let song = state.song_service.patch(id, update).await?;

    info!(song_id = %song.id, "song updated");
    Ok(Json(SongResponse::from(&song)))
}

/// DELETE /songs/{id} - remove a song
pub async fn delete_song(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    if state.song_service.delete(id).await? {
        info!(song_id = id, "song deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("Song {} not found", id)))
    }
}
