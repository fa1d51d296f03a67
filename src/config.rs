//! Runtime configuration
//!
//! Cache TTLs per data class, external API endpoints, and sweeper settings.
//! Defaults can be overridden with `CROPDOC_*` environment variables.

use std::env;
use std::str::FromStr;

/// Default cache TTL in seconds (1 hour)
const DEFAULT_TTL_SECS: i64 = 3600;

/// Disease info changes rarely; cache for 24 hours
const DISEASE_INFO_TTL_SECS: i64 = 86_400;

/// Supplier search results; cache for 30 minutes
const SUPPLIERS_TTL_SECS: i64 = 1800;

/// Prices are the most volatile data class; cache for 15 minutes
const PRICES_TTL_SECS: i64 = 900;

/// Default interval between background cache sweeps
const SWEEP_INTERVAL_SECS: u64 = 60;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Fallback TTL for data without a dedicated class
    pub cache_ttl_default: i64,
    /// TTL for disease info and recommendations
    pub cache_ttl_disease_info: i64,
    /// TTL for supplier search results
    pub cache_ttl_suppliers: i64,
    /// TTL for price quotes
    pub cache_ttl_prices: i64,
    /// Optional bound on live entries per cache
    pub cache_max_entries: Option<usize>,
    /// Seconds between background sweeps
    pub sweep_interval_secs: u64,
    /// Nominatim API base URL
    pub nominatim_base_url: String,
    /// Overpass API interpreter URL
    pub overpass_base_url: String,
    /// User-Agent sent to external APIs
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_default: DEFAULT_TTL_SECS,
            cache_ttl_disease_info: DISEASE_INFO_TTL_SECS,
            cache_ttl_suppliers: SUPPLIERS_TTL_SECS,
            cache_ttl_prices: PRICES_TTL_SECS,
            cache_max_entries: Some(1000),
            sweep_interval_secs: SWEEP_INTERVAL_SECS,
            nominatim_base_url: "https://nominatim.openstreetmap.org".to_string(),
            overpass_base_url: "https://overpass-api.de/api/interpreter".to_string(),
            user_agent: "cropdoc/0.1 (+https://github.com/cropdoc/cropdoc)".to_string(),
        }
    }
}

impl Config {
    /// Builds a config from defaults plus `CROPDOC_*` environment overrides
    ///
    /// Unparseable values fall back to the default silently; a missing or
    /// malformed override should not keep the tool from starting.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Self {
            cache_ttl_default: env_or("CROPDOC_CACHE_TTL_DEFAULT", defaults.cache_ttl_default),
            cache_ttl_disease_info: env_or(
                "CROPDOC_CACHE_TTL_DISEASE_INFO",
                defaults.cache_ttl_disease_info,
            ),
            cache_ttl_suppliers: env_or("CROPDOC_CACHE_TTL_SUPPLIERS", defaults.cache_ttl_suppliers),
            cache_ttl_prices: env_or("CROPDOC_CACHE_TTL_PRICES", defaults.cache_ttl_prices),
            cache_max_entries: env::var("CROPDOC_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .or(defaults.cache_max_entries),
            sweep_interval_secs: env_or("CROPDOC_SWEEP_INTERVAL_SECS", defaults.sweep_interval_secs),
            nominatim_base_url: env::var("CROPDOC_NOMINATIM_URL")
                .unwrap_or(defaults.nominatim_base_url),
            overpass_base_url: env::var("CROPDOC_OVERPASS_URL")
                .unwrap_or(defaults.overpass_base_url),
            user_agent: env::var("CROPDOC_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }
}

/// Reads and parses an environment variable, falling back on any failure
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttls_are_ordered_by_volatility() {
        let config = Config::default();
        assert!(config.cache_ttl_prices < config.cache_ttl_suppliers);
        assert!(config.cache_ttl_suppliers < config.cache_ttl_default);
        assert!(config.cache_ttl_default < config.cache_ttl_disease_info);
    }

    #[test]
    fn test_default_ttls_are_positive() {
        let config = Config::default();
        assert!(config.cache_ttl_default > 0);
        assert!(config.cache_ttl_disease_info > 0);
        assert!(config.cache_ttl_suppliers > 0);
        assert!(config.cache_ttl_prices > 0);
    }

    #[test]
    fn test_env_or_falls_back_on_missing_variable() {
        assert_eq!(env_or("CROPDOC_TEST_UNSET_VARIABLE", 42i64), 42);
    }

    #[test]
    fn test_default_endpoints_point_at_public_apis() {
        let config = Config::default();
        assert!(config.nominatim_base_url.contains("nominatim"));
        assert!(config.overpass_base_url.contains("overpass"));
    }
}
