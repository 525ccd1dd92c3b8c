use std::path::PathBuf;

use serde::Deserialize;

/// CLI configuration loaded from `CATALOG_*` environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Catalog export to load (.csv or .json)
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Upper bound on results per query
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Result count when --limit is not given
    #[serde(default = "default_limit")]
    pub default_limit: i64,

    /// Minimum release year when --min-year is not given
    #[serde(default = "default_min_year")]
    pub default_min_year: i64,
}

fn default_path() -> PathBuf {
    PathBuf::from("data/netflix_titles.csv")
}

fn default_max_limit() -> usize {
    service::DEFAULT_MAX_LIMIT
}

fn default_limit() -> i64 {
    10
}

fn default_min_year() -> i64 {
    2000
}

impl Config {
    /// Load configuration from the environment (and `.env`, if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> anyhow::Result<Self> {
        envy::prefixed("CATALOG_")
            .from_iter(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[("HOME", "/root")])).unwrap();
        assert_eq!(config.path, PathBuf::from("data/netflix_titles.csv"));
        assert_eq!(config.max_limit, 100);
        assert_eq!(config.default_limit, 10);
        assert_eq!(config.default_min_year, 2000);
    }

    #[test]
    fn test_prefixed_overrides() {
        let config = Config::from_vars(vars(&[
            ("CATALOG_PATH", "/tmp/titles.json"),
            ("CATALOG_MAX_LIMIT", "25"),
            ("CATALOG_DEFAULT_MIN_YEAR", "2015"),
        ]))
        .unwrap();
        assert_eq!(config.path, PathBuf::from("/tmp/titles.json"));
        assert_eq!(config.max_limit, 25);
        assert_eq!(config.default_limit, 10);
        assert_eq!(config.default_min_year, 2015);
    }

    #[test]
    fn test_bad_number_is_an_error() {
        assert!(Config::from_vars(vars(&[("CATALOG_MAX_LIMIT", "lots")])).is_err());
    }
}
