use std::time::Duration;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Engine settings, loadable from an optional TOML file with
/// `GASTRONOMIA_`-prefixed environment overrides. Every field has a default,
/// so an embedding application can also start from `Config::default()`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FilterConfig {
    /// Quiet window for coalescing filter-criteria changes.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            featured_count: default_featured_count(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_featured_count() -> usize {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Simulated latency of the built-in static catalog.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

fn default_latency_ms() -> u64 {
    500
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load(path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::with_name(&path));
        } else {
            builder = builder.add_source(File::with_name("gastronomia").required(false));
        }

        builder
            .add_source(Environment::with_prefix("GASTRONOMIA").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.filter.debounce_ms == 0 {
            return Err("filter.debounce_ms must be positive".to_string());
        }
        if self.filter.debounce_ms > 5_000 {
            return Err("filter.debounce_ms above 5000 makes filtering feel stuck".to_string());
        }
        if self.filter.featured_count == 0 {
            return Err("filter.featured_count must be positive".to_string());
        }
        if self.observability.log_level.is_empty() {
            return Err("observability.log_level must not be empty".to_string());
        }
        Ok(())
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.filter.debounce_ms)
    }

    pub fn catalog_latency(&self) -> Duration {
        Duration::from_millis(self.catalog.latency_ms)
    }
}
