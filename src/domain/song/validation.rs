//! Validation for user-supplied song fields

use thiserror::Error;

const MIN_RELEASE_YEAR: i32 = 1000;
const MAX_RELEASE_YEAR: i32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SongValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("artist must not be empty")]
    EmptyArtist,

    #[error("release year {0} is out of range ({MIN_RELEASE_YEAR}-{MAX_RELEASE_YEAR})")]
    ReleaseYearOutOfRange(i32),
}

/// Validates the fields shared by create and replace requests
pub fn validate_song_fields(
    title: &str,
    artist: &str,
    release_year: Option<i32>,
) -> Result<(), SongValidationError> {
    if title.trim().is_empty() {
        return Err(SongValidationError::EmptyTitle);
    }

    if artist.trim().is_empty() {
        return Err(SongValidationError::EmptyArtist);
    }

    if let Some(year) = release_year {
        if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
            return Err(SongValidationError::ReleaseYearOutOfRange(year));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields() {
        assert!(validate_song_fields("Imagine", "John Lennon", Some(1971)).is_ok());
        assert!(validate_song_fields("Imagine", "John Lennon", None).is_ok());
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(
            validate_song_fields("   ", "John Lennon", None),
            Err(SongValidationError::EmptyTitle)
        );
    }

    #[test]
    fn test_empty_artist() {
        assert_eq!(
            validate_song_fields("Imagine", "", None),
            Err(SongValidationError::EmptyArtist)
        );
    }

    #[test]
    fn test_release_year_out_of_range() {
        assert_eq!(
            validate_song_fields("Imagine", "John Lennon", Some(42)),
            Err(SongValidationError::ReleaseYearOutOfRange(42))
        );
    }
}
