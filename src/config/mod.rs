pub mod app_config;

pub use app_config::{
    AppConfig, EnrichmentConfig, LogFormat, LoggingConfig, LyricsConfig, ServerConfig,
};
