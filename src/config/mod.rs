#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{parse_port, validate_connection_url, Validate};
use serde::Serialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use toml_config::TomlConfig;

pub const DEFAULT_PORT: u16 = 8080;

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_CACHE_URL: &str = "REDIS_URL";
pub const ENV_PORT: &str = "PORT";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
pub const ENV_CONFIG_FILE: &str = "SERVICE_CONFIG";

/// Process configuration, built once at startup.
///
/// `database_url` and `cache_url` are carried for the adapters that will
/// eventually use them; no request path reads them yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceConfig {
    pub database_url: String,
    pub cache_url: String,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            cache_url: String::new(),
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, then the file named by `SERVICE_CONFIG` (if any), then
    /// the individual environment variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = lookup(ENV_CONFIG_FILE).filter(|p| !p.trim().is_empty());
        Self::load(file.as_deref().map(Path::new), lookup)
    }

    pub fn load<F>(config_file: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_file {
            tracing::debug!("Loading configuration file {}", path.display());
            let file = TomlConfig::from_file(path, &lookup)?;
            config.apply_file(&file);
        }

        config.apply_env(&lookup)?;
        Ok(config)
    }

    pub fn apply_file(&mut self, file: &TomlConfig) {
        if let Some(port) = file.port() {
            self.port = port;
        }
        if let Some(url) = file.database_url() {
            self.database_url = url.to_string();
        }
        if let Some(url) = file.cache_url() {
            self.cache_url = url.to_string();
        }
        if let Some(format) = file.log_format() {
            self.log_format = format;
        }
    }

    /// 未設定的變數不覆蓋較低層的值
    pub fn apply_env<F>(&mut self, lookup: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_DATABASE_URL) {
            self.database_url = url;
        }
        if let Some(url) = lookup(ENV_CACHE_URL) {
            self.cache_url = url;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = parse_port(ENV_PORT, &port)?;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.log_format = format.parse()?;
        }
        Ok(())
    }

    /// All interfaces, configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Validate for ServiceConfig {
    /// The connection strings are never used by a request path, so any value
    /// is accepted. Ones that do not look like URLs (libpq keyword DSNs,
    /// bare host names) only produce a warning.
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            (ENV_DATABASE_URL, &self.database_url),
            (ENV_CACHE_URL, &self.cache_url),
        ] {
            if let Err(e) = validate_connection_url(field, value) {
                tracing::warn!("⚠️ {}", e);
            }
        }
        Ok(())
    }
}
