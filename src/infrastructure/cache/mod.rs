//! In-memory caching

pub mod ttl;

pub use ttl::TtlCache;
