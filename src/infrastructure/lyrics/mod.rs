//! Lyrics provider client implementations

pub mod ovh;

pub use ovh::LyricsOvhClient;
