//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the catalog file (JSON, or YAML for `.yaml`/`.yml`).
    pub catalog_path: PathBuf,
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Fixed RNG seed; `None` seeds from the operating system.
    pub rng_seed: Option<u64>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Required:
    /// - `CATALOG_PATH`: catalog file to serve
    ///
    /// Optional:
    /// - `HOST` (default `0.0.0.0`)
    /// - `PORT` (default `3000`)
    /// - `RNG_SEED`: makes answer picks and shuffles reproducible
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is missing or malformed.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is missing or malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let catalog_path = lookup("CATALOG_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                AppError::Config("CATALOG_PATH environment variable must be set".to_owned())
            })?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_owned());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };

        let rng_seed = lookup("RNG_SEED")
            .map(|raw| {
                raw.parse()
                    .map_err(|e| AppError::Config(format!("RNG_SEED must be a valid u64: {e}")))
            })
            .transpose()?;

        Ok(Self {
            catalog_path,
            host,
            port,
            rng_seed,
        })
    }

    /// The address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied_when_only_catalog_path_set() {
        let config = Config::from_lookup(lookup_from(&[("CATALOG_PATH", "data/anime.json")]))
            .unwrap();

        assert_eq!(config.catalog_path, PathBuf::from("data/anime.json"));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_all_variables_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("CATALOG_PATH", "anime.yaml"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("RNG_SEED", "42"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_missing_catalog_path_is_config_error() {
        let result = Config::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let result = Config::from_lookup(lookup_from(&[
            ("CATALOG_PATH", "anime.json"),
            ("PORT", "seventy"),
        ]));
        match result {
            Err(AppError::Config(msg)) => assert!(msg.starts_with("PORT must be a valid u16")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_seed_is_config_error() {
        let result = Config::from_lookup(lookup_from(&[
            ("CATALOG_PATH", "anime.json"),
            ("RNG_SEED", "-1"),
        ]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_invalid_host_fails_socket_addr() {
        let config = Config::from_lookup(lookup_from(&[
            ("CATALOG_PATH", "anime.json"),
            ("HOST", "not a host"),
        ]))
        .unwrap();
        assert!(matches!(config.socket_addr(), Err(AppError::Config(_))));
    }
}
