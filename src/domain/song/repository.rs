//! Song repository trait

use async_trait::async_trait;
use serde::Deserialize;

use super::{Song, SongDraft, SongId};
use crate::domain::DomainError;

/// Filter criteria for catalog searches. All populated fields must match;
/// text fields match case-insensitively on substrings, the year exactly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCriteria {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.genre.is_none()
            && self.release_year.is_none()
    }

    pub fn matches(&self, song: &Song) -> bool {
        fn contains(haystack: &str, needle: &str) -> bool {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }

        if let Some(title) = &self.title {
            if !contains(&song.title, title) {
                return false;
            }
        }
        if let Some(artist) = &self.artist {
            if !contains(&song.artist, artist) {
                return false;
            }
        }
        if let Some(album) = &self.album {
            match &song.album {
                Some(value) if contains(value, album) => {}
                _ => return false,
            }
        }
        if let Some(genre) = &self.genre {
            match &song.genre {
                Some(value) if contains(value, genre) => {}
                _ => return false,
            }
        }
        if let Some(year) = self.release_year {
            if song.release_year != Some(year) {
                return false;
            }
        }

        true
    }
}

/// Repository trait for song persistence
#[async_trait]
pub trait SongRepository: Send + Sync + std::fmt::Debug {
    /// Get a song by id
    async fn get(&self, id: SongId) -> Result<Option<Song>, DomainError>;

    /// Get all songs, ordered by id
    async fn list(&self) -> Result<Vec<Song>, DomainError>;

    /// Get all songs matching the criteria, ordered by id
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Song>, DomainError>;

    /// Insert a new song. With an explicit id the insert conflicts if the id
    /// is taken; without one the next free id is assigned.
    async fn create(
        &self,
        requested_id: Option<SongId>,
        draft: SongDraft,
    ) -> Result<Song, DomainError>;

    /// Store the given song over the existing one with the same id
    async fn update(&self, song: Song) -> Result<Song, DomainError>;

    /// Delete a song by id, returning whether it existed
    async fn delete(&self, id: SongId) -> Result<bool, DomainError>;

    /// Check whether a song exists
    async fn exists(&self, id: SongId) -> Result<bool, DomainError>;
}

/// In-memory implementation of SongRepository
pub mod in_memory {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug)]
    struct Inner {
        songs: HashMap<u64, Song>,
        next_id: u64,
    }

    /// In-memory song store. One mutex guards both the map and the id
    /// counter so auto-assignment is atomic with the insert.
    #[derive(Debug)]
    pub struct InMemorySongRepository {
        inner: Mutex<Inner>,
    }

    impl InMemorySongRepository {
        pub fn new() -> Self {
            Self {
                inner: Mutex::new(Inner {
                    songs: HashMap::new(),
                    next_id: 1,
                }),
            }
        }

        pub fn with_songs(self, songs: Vec<Song>) -> Self {
            {
                let mut inner = self.inner.lock().unwrap();
                for song in songs {
                    inner.next_id = inner.next_id.max(song.id.value() + 1);
                    inner.songs.insert(song.id.value(), song);
                }
            }
            self
        }
    }

    impl Default for InMemorySongRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl SongRepository for InMemorySongRepository {
        async fn get(&self, id: SongId) -> Result<Option<Song>, DomainError> {
            Ok(self.inner.lock().unwrap().songs.get(&id.value()).cloned())
        }

        async fn list(&self) -> Result<Vec<Song>, DomainError> {
            let mut songs: Vec<Song> = self.inner.lock().unwrap().songs.values().cloned().collect();
            songs.sort_by_key(|s| s.id);
            Ok(songs)
        }

        async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Song>, DomainError> {
            let mut songs: Vec<Song> = self
                .inner
                .lock()
                .unwrap()
                .songs
                .values()
                .filter(|s| criteria.matches(s))
                .cloned()
                .collect();
            songs.sort_by_key(|s| s.id);
            Ok(songs)
        }

        async fn create(
            &self,
            requested_id: Option<SongId>,
            draft: SongDraft,
        ) -> Result<Song, DomainError> {
            let mut inner = self.inner.lock().unwrap();

            let id = match requested_id {
                Some(id) => {
                    if inner.songs.contains_key(&id.value()) {
                        return Err(DomainError::conflict(format!(
                            "Song with id {} already exists",
                            id
                        )));
                    }
                    id
                }
                None => SongId::new(inner.next_id),
            };

            let song = Song::from_draft(id, draft);
            inner.songs.insert(id.value(), song.clone());
            // Keep the counter above every id ever used, including explicit ones
            inner.next_id = inner.next_id.max(id.value() + 1);

            Ok(song)
        }

        async fn update(&self, song: Song) -> Result<Song, DomainError> {
            let mut inner = self.inner.lock().unwrap();

            if !inner.songs.contains_key(&song.id.value()) {
                return Err(DomainError::not_found(format!(
                    "Song {} not found",
                    song.id
                )));
            }

            inner.songs.insert(song.id.value(), song.clone());
            Ok(song)
        }

        async fn delete(&self, id: SongId) -> Result<bool, DomainError> {
            Ok(self.inner.lock().unwrap().songs.remove(&id.value()).is_some())
        }

        async fn exists(&self, id: SongId) -> Result<bool, DomainError> {
            Ok(self.inner.lock().unwrap().songs.contains_key(&id.value()))
        }
    }

}

#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// Mock repository with error injection for testing
    #[derive(Debug, Default)]
    pub struct MockSongRepository {
        songs: Mutex<HashMap<u64, Song>>,
        next_id: Mutex<u64>,
        error: Mutex<Option<String>>,
    }

    impl MockSongRepository {
        pub fn new() -> Self {
            Self {
                songs: Mutex::new(HashMap::new()),
                next_id: Mutex::new(1),
                error: Mutex::new(None),
            }
        }

        pub fn with_song(self, song: Song) -> Self {
            {
                let mut next_id = self.next_id.lock().unwrap();
                *next_id = (*next_id).max(song.id.value() + 1);
                self.songs.lock().unwrap().insert(song.id.value(), song);
            }
            self
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            *self.error.lock().unwrap() = Some(error.into());
            self
        }

        fn check_error(&self) -> Result<(), DomainError> {
            if let Some(err) = self.error.lock().unwrap().as_ref() {
                return Err(DomainError::storage(err.clone()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl SongRepository for MockSongRepository {
        async fn get(&self, id: SongId) -> Result<Option<Song>, DomainError> {
            self.check_error()?;
            Ok(self.songs.lock().unwrap().get(&id.value()).cloned())
        }

        async fn list(&self) -> Result<Vec<Song>, DomainError> {
            self.check_error()?;
            let mut songs: Vec<Song> = self.songs.lock().unwrap().values().cloned().collect();
            songs.sort_by_key(|s| s.id);
            Ok(songs)
        }

        async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Song>, DomainError> {
            self.check_error()?;
            let mut songs: Vec<Song> = self
                .songs
                .lock()
                .unwrap()
                .values()
                .filter(|s| criteria.matches(s))
                .cloned()
                .collect();
            songs.sort_by_key(|s| s.id);
            Ok(songs)
        }

        async fn create(
            &self,
            requested_id: Option<SongId>,
            draft: SongDraft,
        ) -> Result<Song, DomainError> {
            self.check_error()?;
            let mut songs = self.songs.lock().unwrap();
            let mut next_id = self.next_id.lock().unwrap();

            let id = match requested_id {
                Some(id) => {
                    if songs.contains_key(&id.value()) {
                        return Err(DomainError::conflict(format!(
                            "Song with id {} already exists",
                            id
                        )));
                    }
                    id
                }
                None => SongId::new(*next_id),
            };

            let song = Song::from_draft(id, draft);
            songs.insert(id.value(), song.clone());
            *next_id = (*next_id).max(id.value() + 1);

            Ok(song)
        }

        async fn update(&self, song: Song) -> Result<Song, DomainError> {
            self.check_error()?;
            let mut songs = self.songs.lock().unwrap();

            if !songs.contains_key(&song.id.value()) {
                return Err(DomainError::not_found(format!(
                    "Song {} not found",
                    song.id
                )));
            }

            songs.insert(song.id.value(), song.clone());
            Ok(song)
        }

        async fn delete(&self, id: SongId) -> Result<bool, DomainError> {
            self.check_error()?;
            Ok(self.songs.lock().unwrap().remove(&id.value()).is_some())
        }

        async fn exists(&self, id: SongId) -> Result<bool, DomainError> {
            self.check_error()?;
            Ok(self.songs.lock().unwrap().contains_key(&id.value()))
        }
    }
}
