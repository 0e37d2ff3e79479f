//! Domain layer - entities, client traits, and error taxonomy

pub mod enrichment;
pub mod error;
pub mod lyrics;
pub mod song;

pub use enrichment::{
    EnrichmentClient, EnrichmentError, EnrichmentJob, JobId, JobOutcome, JobOutcomeSink, JobStatus,
};
pub use error::DomainError;
pub use lyrics::{CachedLyrics, LookupError, LyricsClient, LyricsKey};
pub use song::{
    validate_song_fields, EnrichedAttributes, InMemorySongRepository, SearchCriteria, Song,
    SongDraft, SongId, SongRepository, SongUpdate, SongValidationError,
};
