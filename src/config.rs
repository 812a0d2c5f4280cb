use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::services::ScoringKind;

/// Dataset used when neither `DATA_FILE` nor the config file name one.
pub const DEFAULT_DATA_FILE: &str = "data/enwiki-tiny.txt";

/// Longest accepted `SEARCH_CACHE_TTL_SECONDS` (one year).
pub const MAX_CACHE_TTL_SECONDS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub index: IndexConfig,
    pub search: SearchConfig,
    pub cache: CacheSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub web_root: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub scoring: ScoringKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    pub entries: usize,
    pub ttl_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                workers: num_cpus::get(),
                web_root: PathBuf::from("web"),
            },
            index: IndexConfig {
                data_file: PathBuf::from(DEFAULT_DATA_FILE),
            },
            search: SearchConfig {
                scoring: ScoringKind::Tf,
            },
            cache: CacheSettings {
                entries: 256,
                ttl_seconds: 300,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Config::default();

        // Server configuration
        if let Ok(host) = env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.server.port = port.parse()?;
        }
        if let Ok(workers) = env::var("WORKERS") {
            config.server.workers = workers.parse()?;
        }
        if let Ok(web_root) = env::var("WEB_ROOT") {
            config.server.web_root = PathBuf::from(web_root);
        }

        // Dataset: DATA_FILE wins, then the file named in CONFIG_FILE
        if let Ok(data_file) = env::var("DATA_FILE") {
            config.index.data_file = PathBuf::from(data_file);
        } else {
            let config_file = env::var("CONFIG_FILE").unwrap_or_else(|_| "config.txt".to_string());
            if let Some(data_file) = data_file_from(&config_file) {
                config.index.data_file = data_file;
            }
        }

        // Search configuration
        if let Ok(scoring) = env::var("SCORING_METHOD") {
            config.search.scoring = scoring.parse()?;
        }
        if let Ok(entries) = env::var("SEARCH_CACHE_ENTRIES") {
            config.cache.entries = entries.parse()?;
        }
        if let Ok(ttl_seconds) = env::var("SEARCH_CACHE_TTL_SECONDS") {
            config.cache.ttl_seconds = ttl_seconds.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.workers == 0 {
            anyhow::bail!("WORKERS must be at least 1");
        }
        if self.cache.ttl_seconds > MAX_CACHE_TTL_SECONDS {
            anyhow::bail!(
                "SEARCH_CACHE_TTL_SECONDS must be at most {} (got {})",
                MAX_CACHE_TTL_SECONDS,
                self.cache.ttl_seconds
            );
        }
        Ok(())
    }
}

/// Reads a dataset path from a one-line config file. Missing or blank files
/// yield `None`.
pub fn data_file_from(config_file: &str) -> Option<PathBuf> {
    let contents = fs::read_to_string(config_file).ok()?;
    let path = contents.trim();
    (!path.is_empty()).then(|| PathBuf::from(path))
}
