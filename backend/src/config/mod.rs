//! Application configuration management

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::db::DEFAULT_MAX_CONNECTIONS;
use crate::pagination::{DEFAULT_MAX_PAGE_SIZE, PageLimits};

const DEFAULT_DATABASE_URL: &str = "sqlite://./data/catalog.db";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Interface to bind
    pub host: String,

    /// Server port
    pub port: u16,

    /// SQLite URL, from DATABASE_URL or DATABASE_PATH
    pub database_url: String,

    pub database_max_connections: u32,

    /// Largest page any connection field returns
    pub max_page_size: usize,

    /// Insert the demo catalog on startup
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("DATABASE_PATH").map(|path| sqlite_url(&path)))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: parse_or(&lookup, "PORT", 3001)?,

            database_url,

            database_max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,

            max_page_size: parse_or(&lookup, "MAX_PAGE_SIZE", DEFAULT_MAX_PAGE_SIZE)?,

            seed_demo_data: lookup("SEED_DEMO_DATA")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }

    pub fn page_limits(&self) -> PageLimits {
        PageLimits::new(self.max_page_size)
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn sqlite_url(path: &str) -> String {
    if path.starts_with("sqlite:") {
        path.to_string()
    } else {
        format!("sqlite://{}", path)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(
            config,
            Config {
                host: "0.0.0.0".to_string(),
                port: 3001,
                database_url: "sqlite://./data/catalog.db".to_string(),
                database_max_connections: 10,
                max_page_size: 100,
                seed_demo_data: false,
            }
        );
    }

    #[test]
    fn test_database_path_becomes_url() {
        let config = config(&[("DATABASE_PATH", "/var/lib/catalog.db")]).unwrap();
        assert_eq!(config.database_url, "sqlite:///var/lib/catalog.db");
    }

    #[test]
    fn test_database_url_wins_over_path() {
        let config = config(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_PATH", "/var/lib/catalog.db"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("PORT", "8080"),
            ("MAX_PAGE_SIZE", "25"),
            ("SEED_DEMO_DATA", "1"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.page_limits(), PageLimits::new(25));
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_invalid_port() {
        let err = config(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("Invalid PORT"));
    }
}
