use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub lyrics: LyricsConfig,
    pub enrichment: EnrichmentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Lyrics provider and cache settings
#[derive(Debug, Clone, Deserialize)]
pub struct LyricsConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub cache_capacity: usize,
    pub cache_ttl_secs: u64,
}

/// Enrichment provider and worker pool settings
#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentConfig {
    pub base_url: String,
    /// Unbounded when unset
    pub max_concurrent_jobs: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            lyrics: LyricsConfig::default(),
            enrichment: EnrichmentConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for LyricsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.lyrics.ovh".to_string(),
            timeout_ms: 5000,
            cache_capacity: 500,
            cache_ttl_secs: 600,
        }
    }
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9090".to_string(),
            max_concurrent_jobs: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
