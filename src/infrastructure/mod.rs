//! Infrastructure layer - concrete implementations and external clients

pub mod cache;
pub mod enrichment;
pub mod logging;
pub mod lyrics;
pub mod services;
