use crate::config::{ServiceConfig, ENV_CONFIG_FILE};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

/// Command-line overrides. Launching with no flags uses the environment only.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "template-service")]
#[command(about = "Microservice template exposing health and readiness probes")]
#[command(version)]
pub struct CliArgs {
    #[arg(long, help = "TOML configuration file (defaults to $SERVICE_CONFIG)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Listening port, overrides $PORT")]
    pub port: Option<u16>,

    #[arg(long, value_parser = parse_log_format, help = "Log output format: compact or json")]
    pub log_format: Option<LogFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

fn parse_log_format(value: &str) -> std::result::Result<LogFormat, String> {
    value.parse().map_err(|e: crate::utils::error::ServiceError| e.to_string())
}

impl CliArgs {
    pub fn into_config(self) -> Result<ServiceConfig> {
        self.resolve(|key| std::env::var(key).ok())
    }

    /// File, then environment, then flags.
    pub fn resolve<F>(self, lookup: F) -> Result<ServiceConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_file = self.config.or_else(|| {
            lookup(ENV_CONFIG_FILE)
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
        });

        let mut config = ServiceConfig::load(config_file.as_deref(), lookup)?;

        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }

        Ok(config)
    }
}
