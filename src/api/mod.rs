//! HTTP API layer

pub mod enrichment;
pub mod health;
pub mod lyrics;
pub mod router;
pub mod songs;
pub mod state;
pub mod types;

pub use router::create_router_with_state;
pub use state::AppState;
