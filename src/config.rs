use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::fetchers::DEFAULT_USER_AGENT;
use crate::layout::MarkupLayout;

/// Process configuration for the scraper
#[derive(Debug, Deserialize, Clone)]
pub struct ScraperConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// How long a parsed result stays in the cache, in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Maximum number of cached results
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    /// Markup table; rows left out keep their built-in values
    #[serde(default)]
    pub layout: MarkupLayout,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            cache_ttl_secs: default_cache_ttl_secs(),
            cache_capacity: default_cache_capacity(),
            layout: MarkupLayout::default(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_cache_capacity() -> usize {
    256
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with CATALOG__ prefix
    /// 2. catalog.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: CATALOG__CACHE_TTL_SECS, CATALOG__LAYOUT__ID_ATTR
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

/// Load configuration, see [`ScraperConfig::load`].
pub fn load_config() -> Result<ScraperConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("catalog").required(false))
        // Use double underscore for nested: CATALOG__LAYOUT__CARD_MARKER
        .add_source(
            Environment::with_prefix("CATALOG")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        let config = ScraperConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
        assert_eq!(config.cache_capacity, 256);
        assert_eq!(config.layout, MarkupLayout::default());
    }

    #[test]
    fn test_toml_overrides_single_layout_row() {
        let toml = r#"
            cache_ttl_secs = 60

            [layout]
            tooltip_attr = "title"

            [layout.quantity]
            marker = '<em class="count"'
            close = "</em>"
        "#;

        let config: ScraperConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.cache_ttl_secs, 60);
        assert_eq!(config.timeout, 30);
        assert_eq!(config.layout.tooltip_attr, "title");
        assert_eq!(config.layout.quantity.marker, r#"<em class="count""#);
        assert_eq!(config.layout.quantity.nest, "");
        assert_eq!(config.layout.card_marker, MarkupLayout::default().card_marker);
    }

    #[test]
    fn test_load_config_without_file() {
        // no catalog.toml next to Cargo.toml, so every field falls back to its default
        let config = load_config().unwrap();
        assert_eq!(config.layout.requirements, MarkupLayout::default().requirements);
    }
}
