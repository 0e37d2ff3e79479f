//! Lyrics lookup domain: cache key, client trait, errors

pub mod client;
pub mod key;

pub use client::{LookupError, LyricsClient};
pub use key::LyricsKey;

/// What the lyrics cache remembers for a key. A resolved "no lyrics" answer
/// is cached too (negative caching), with the same lifetime as a hit, so
/// repeated lookups for unresolvable songs do not re-hit the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedLyrics {
    Found(String),
    NotFound,
}
