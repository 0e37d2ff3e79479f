//! Song service - CRUD and search over the catalog store

use std::sync::Arc;

use crate::domain::song::{
    validate_song_fields, SearchCriteria, Song, SongDraft, SongId, SongRepository, SongUpdate,
};
use crate::domain::DomainError;

/// Request to create a new song. An id of `None` (or 0) asks the store to
/// assign the next free one.
#[derive(Debug, Clone)]
pub struct CreateSongRequest {
    pub id: Option<u64>,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
}

impl CreateSongRequest {
    fn into_parts(self) -> (Option<SongId>, SongDraft) {
        let id = match self.id {
            Some(0) | None => None,
            Some(id) => Some(SongId::new(id)),
        };
        (
            id,
            SongDraft {
                title: self.title,
                artist: self.artist,
                album: self.album,
                genre: self.genre,
                release_year: self.release_year,
            },
        )
    }
}

/// Song service for catalog CRUD operations
#[derive(Debug)]
pub struct SongService {
    repository: Arc<dyn SongRepository>,
}

impl SongService {
    pub fn new(repository: Arc<dyn SongRepository>) -> Self {
        Self { repository }
    }

    /// Get a song by id
    pub async fn get(&self, id: u64) -> Result<Option<Song>, DomainError> {
        self.repository.get(SongId::new(id)).await
    }

    /// Get a song by id, erroring if it does not exist
    pub async fn get_required(&self, id: u64) -> Result<Song, DomainError> {
        self.get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Song {} not found", id)))
    }

    /// List songs matching the criteria; empty criteria list everything
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Song>, DomainError> {
        if criteria.is_empty() {
            self.repository.list().await
        } else {
            self.repository.search(criteria).await
        }
    }

    /// Create a new song
    pub async fn create(&self, request: CreateSongRequest) -> Result<Song, DomainError> {
        validate_song_fields(&request.title, &request.artist, request.release_year)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let (id, draft) = request.into_parts();
        self.repository.create(id, draft).await
    }

    /// Replace all user-editable fields of an existing song. Enriched
    /// attributes are cleared; re-enrichment runs against the new fields.
    pub async fn replace(&self, id: u64, request: CreateSongRequest) -> Result<Song, DomainError> {
        validate_song_fields(&request.title, &request.artist, request.release_year)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let mut song = self.get_required(id).await?;
        let (_, draft) = request.into_parts();
        song.replace_fields(draft);

        self.repository.update(song).await
    }

    /// Apply a partial update to an existing song
    pub async fn patch(&self, id: u64, update: SongUpdate) -> Result<Song, DomainError> {
        let mut song = self.get_required(id).await?;
        song.apply_update(update);

        validate_song_fields(&song.title, &song.artist, song.release_year)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.update(song).await
    }

    /// Delete a song by id, returning whether it existed
    pub async fn delete(&self, id: u64) -> Result<bool, DomainError> {
        self.repository.delete(SongId::new(id)).await
    }
}
