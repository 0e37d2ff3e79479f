//! Song entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric song identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(u64);

impl SongId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for SongId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SongId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derived attributes produced by the enrichment provider.
///
/// The enrichment worker is the only writer of these fields; the catalog
/// store is their only durable holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedAttributes {
    /// Beats per minute
    pub bpm: u32,
    /// e.g. "Energetic", "Melancholic"
    pub mood: String,
    /// Refined genre, e.g. "Progressive Rock"
    pub enriched_genre: String,
}

/// User-supplied song fields, before an id is assigned
#[derive(Debug, Clone, Default)]
pub struct SongDraft {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    /// Present only after a successful enrichment job
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enriched: Option<EnrichedAttributes>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Song {
    /// Builds a new song from user-supplied fields
    pub fn from_draft(id: SongId, draft: SongDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title,
            artist: draft.artist,
            album: draft.album,
            genre: draft.genre,
            release_year: draft.release_year,
            enriched: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches derived attributes, bumping the update timestamp
    pub fn apply_enrichment(&mut self, attributes: EnrichedAttributes) {
        self.enriched = Some(attributes);
        self.updated_at = Utc::now();
    }

    /// Applies a partial update; fields left unset keep their current value
    pub fn apply_update(&mut self, update: SongUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(artist) = update.artist {
            self.artist = artist;
        }
        if let Some(album) = update.album {
            self.album = Some(album);
        }
        if let Some(genre) = update.genre {
            self.genre = Some(genre);
        }
        if let Some(release_year) = update.release_year {
            self.release_year = Some(release_year);
        }
        self.updated_at = Utc::now();
    }

    /// Replaces all user-editable fields. Derived attributes are cleared
    /// since they were computed from the old title/artist.
    pub fn replace_fields(&mut self, draft: SongDraft) {
        self.title = draft.title;
        self.artist = draft.artist;
        self.album = draft.album;
        self.genre = draft.genre;
        self.release_year = draft.release_year;
        self.enriched = None;
        self.updated_at = Utc::now();
    }
}

/// Partial song update; `None` means "leave unchanged"
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SongUpdate {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
}

impl SongUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.genre.is_none()
            && self.release_year.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, artist: &str) -> SongDraft {
        SongDraft {
            title: title.to_string(),
            artist: artist.to_string(),
            album: None,
            genre: None,
            release_year: None,
        }
    }

    #[test]
    fn test_from_draft() {
        let song = Song::from_draft(SongId::new(1), draft("Imagine", "John Lennon"));
        assert_eq!(song.id.value(), 1);
        assert_eq!(song.title, "Imagine");
        assert_eq!(song.artist, "John Lennon");
        assert!(song.enriched.is_none());
        assert_eq!(song.created_at, song.updated_at);
    }

    #[test]
    fn test_apply_enrichment_preserves_fields() {
        let mut song = Song::from_draft(SongId::new(7), draft("Billie Jean", "Michael Jackson"));
        song.album = Some("Thriller".to_string());

        song.apply_enrichment(EnrichedAttributes {
            bpm: 117,
            mood: "Funky".to_string(),
            enriched_genre: "Pop/R&B".to_string(),
        });

        assert_eq!(song.title, "Billie Jean");
        assert_eq!(song.album.as_deref(), Some("Thriller"));
        let enriched = song.enriched.expect("enriched attributes set");
        assert_eq!(enriched.bpm, 117);
        assert_eq!(enriched.mood, "Funky");
    }

    #[test]
    fn test_apply_update_partial() {
        let mut song = Song::from_draft(SongId::new(2), draft("Yesterday", "Beatles"));
        song.apply_update(SongUpdate {
            album: Some("Help!".to_string()),
            release_year: Some(1965),
            ..Default::default()
        });

        assert_eq!(song.title, "Yesterday");
        assert_eq!(song.album.as_deref(), Some("Help!"));
        assert_eq!(song.release_year, Some(1965));
    }

    #[test]
    fn test_replace_fields_clears_enrichment() {
        let mut song = Song::from_draft(SongId::new(3), draft("Imagine", "John Lennon"));
        song.apply_enrichment(EnrichedAttributes {
            bpm: 75,
            mood: "Peaceful".to_string(),
            enriched_genre: "Soft Rock".to_string(),
        });

        song.replace_fields(draft("Hey Jude", "Beatles"));

        assert_eq!(song.title, "Hey Jude");
        assert!(song.enriched.is_none());
    }

    #[test]
    fn test_song_update_is_empty() {
        assert!(SongUpdate::default().is_empty());
        assert!(
            !SongUpdate {
                title: Some("x".to_string()),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
