//! Lyrics provider client trait and error taxonomy

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a lyrics lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The provider explicitly reported no lyrics for this song. Expected
    /// absence, not an operational fault.
    #[error("no lyrics found for '{title}' by '{artist}'")]
    NotFound { title: String, artist: String },

    /// Network or protocol failure reaching the provider
    #[error("lyrics provider unavailable: {message}")]
    ProviderUnavailable { message: String },

    /// The provider answered with a payload we cannot interpret
    #[error("invalid response from lyrics provider: {message}")]
    InvalidResponse { message: String },
}

impl LookupError {
    pub fn not_found(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self::NotFound {
            title: title.into(),
            artist: artist.into(),
        }
    }

    pub fn provider_unavailable(message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

/// Client for an external lyrics provider. Pure I/O boundary: one outbound
/// call per invocation, no internal retry and no state.
#[async_trait]
pub trait LyricsClient: Send + Sync + std::fmt::Debug {
    async fn fetch(&self, title: &str, artist: &str) -> Result<String, LookupError>;
}
