//! Process configuration read from the environment at startup.

use anyhow::{Context, Result, bail};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_API_KEY: &str = "fidara_secret_key";
pub const DEFAULT_TOP_K: usize = 6;
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shared secret expected in the `x-api-key` header.
    pub api_key: String,
    /// Limit used when a request carries no usable `top_k`.
    pub default_top_k: usize,
    pub bind_addr: SocketAddr,
    /// JSON catalog file; the built-in sample catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so it can be tested without
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY").unwrap_or_else(|| DEFAULT_API_KEY.to_string());

        let default_top_k = match lookup("TOP_K_DEFAULT") {
            Some(raw) => {
                let k: usize = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("TOP_K_DEFAULT is not a valid integer: {:?}", raw))?;
                if k == 0 {
                    bail!("TOP_K_DEFAULT must be greater than zero");
                }
                k
            }
            None => DEFAULT_TOP_K,
        };

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("BIND_ADDR is not a valid socket address: {:?}", raw))?,
            None => {
                let port = match lookup("PORT") {
                    Some(raw) => raw
                        .trim()
                        .parse()
                        .with_context(|| format!("PORT is not a valid port: {:?}", raw))?,
                    None => DEFAULT_PORT,
                };
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };

        let catalog_path = lookup("CATALOG_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            api_key,
            default_top_k,
            bind_addr,
            catalog_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.api_key, "fidara_secret_key");
        assert_eq!(config.default_top_k, 6);
        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("API_KEY", "s3cret"),
            ("TOP_K_DEFAULT", "3"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("CATALOG_PATH", "/tmp/catalog.json"),
        ])
        .unwrap();

        assert_eq!(config.api_key, "s3cret");
        assert_eq!(config.default_top_k, 3);
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
    }

    #[test]
    fn test_port_used_when_no_bind_addr() {
        let config = config_from(&[("PORT", "10000")]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:10000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_invalid_top_k_is_an_error() {
        assert!(config_from(&[("TOP_K_DEFAULT", "six")]).is_err());
        assert!(config_from(&[("TOP_K_DEFAULT", "-1")]).is_err());
        assert!(config_from(&[("TOP_K_DEFAULT", "0")]).is_err());
    }

    #[test]
    fn test_invalid_bind_addr_is_an_error() {
        assert!(config_from(&[("BIND_ADDR", "localhost")]).is_err());
        assert!(config_from(&[("PORT", "99999")]).is_err());
    }

    #[test]
    fn test_empty_catalog_path_is_ignored() {
        let config = config_from(&[("CATALOG_PATH", "")]).unwrap();
        assert!(config.catalog_path.is_none());
    }
}
