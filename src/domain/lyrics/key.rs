//! Cache key for lyrics lookups

/// Normalized (title, artist) pair used as the lyrics cache key.
///
/// Normalization trims surrounding whitespace and lower-cases both parts so
/// case and spacing variants of the same song collide to one cache entry.
/// It never fails on valid strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LyricsKey {
    title: String,
    artist: String,
}

impl LyricsKey {
    pub fn new(title: &str, artist: &str) -> Self {
        Self {
            title: title.trim().to_lowercase(),
            artist: artist.trim().to_lowercase(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }
}

impl std::fmt::Display for LyricsKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.artist, self.title)
    }
}
