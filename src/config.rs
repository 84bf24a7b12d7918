use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub contract: ContractSettings,
    #[serde(default)]
    pub feed: FeedSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Deployment parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractSettings {
    /// Identity recorded as owner; a fresh one is generated when unset
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FeedSettings {
    #[serde(default = "default_feed_limit")]
    pub default_limit: usize,
    #[serde(default = "default_feed_max_limit")]
    pub max_limit: usize,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            default_limit: default_feed_limit(),
            max_limit: default_feed_max_limit(),
        }
    }
}

impl FeedSettings {
    /// Apply the default and cap to a client-supplied limit
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

fn default_feed_limit() -> usize { 20 }
fn default_feed_max_limit() -> usize { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_match_cache_size")]
    pub match_cache_size: u64,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            match_cache_size: default_match_cache_size(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_match_cache_size() -> u64 { 10_000 }
fn default_cache_ttl() -> u64 { 300 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TINDER_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TINDER__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("TINDER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.feed.default_limit, 20);
        assert_eq!(settings.feed.max_limit, 100);
        assert_eq!(settings.cache.ttl_secs, 300);
        assert!(settings.contract.owner.is_none());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                "[server]\nport = 9000\n\n[contract]\nowner = \"0xdeployer\"\n\n[feed]\nmax_limit = 50\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.contract.owner.as_deref(), Some("0xdeployer"));
        assert_eq!(settings.feed.max_limit, 50);
        assert_eq!(settings.feed.default_limit, 20);
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn test_clamp_limit() {
        let feed = FeedSettings { default_limit: 10, max_limit: 25 };
        assert_eq!(feed.clamp_limit(None), 10);
        assert_eq!(feed.clamp_limit(Some(5)), 5);
        assert_eq!(feed.clamp_limit(Some(500)), 25);
    }
}
