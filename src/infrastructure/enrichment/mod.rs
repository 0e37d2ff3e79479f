//! Asynchronous enrichment pipeline: scheduler, worker, provider client

pub mod http_client;
pub mod scheduler;
pub mod sink;
pub mod worker;

pub use http_client::HttpEnrichmentClient;
pub use scheduler::EnrichmentScheduler;
pub use sink::TracingOutcomeSink;
pub use worker::EnrichmentWorker;
