//! Application services built on the domain traits

pub mod lyrics_service;
pub mod song_service;

pub use lyrics_service::{LyricsCacheConfig, LyricsService};
pub use song_service::{CreateSongRequest, SongService};
