//! Song domain types and persistence trait

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::{EnrichedAttributes, Song, SongDraft, SongId, SongUpdate};
pub use repository::in_memory::InMemorySongRepository;
pub use repository::{SearchCriteria, SongRepository};
pub use validation::{validate_song_fields, SongValidationError};
