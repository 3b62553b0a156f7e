use crate::utils::error::{Result, ServiceError};
use crate::utils::logger::LogFormat;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

// ${VAR_NAME}
static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is a valid regex")
});

/// Optional file layer under the environment. Every table and key may be
/// omitted.
///
/// ```toml
/// [service]
/// port = 8080
///
/// [database]
/// url = "${DATABASE_URL}"
///
/// [cache]
/// url = "redis://cache:6379/0"
///
/// [logging]
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub service: Option<ServiceSection>,
    pub database: Option<ConnectionSection>,
    pub cache: Option<ConnectionSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionSection {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P, F>(path: P, lookup: &F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string(), lookup)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str<F>(content: &str, lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::parse(content, "inline TOML", lookup)
    }

    fn parse<F>(content: &str, source_name: &str, lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed = substitute_env_vars(content, lookup);

        toml::from_str(&processed).map_err(|e| ServiceError::ConfigParseError {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    pub fn port(&self) -> Option<u16> {
        self.service.as_ref().and_then(|s| s.port)
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database.as_ref().and_then(|d| d.url.as_deref())
    }

    pub fn cache_url(&self) -> Option<&str> {
        self.cache.as_ref().and_then(|c| c.url.as_deref())
    }

    pub fn log_format(&self) -> Option<LogFormat> {
        self.logging.as_ref().and_then(|l| l.format)
    }
}

/// 替換環境變數 (例如 ${DATABASE_URL})，未定義的變數保留原樣
fn substitute_env_vars<F>(content: &str, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let result = ENV_VAR_PATTERN.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        lookup(var_name).unwrap_or_else(|| caps[0].to_string())
    });

    result.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[service]
port = 9100

[database]
url = "postgres://app@db:5432/app"

[cache]
url = "redis://cache:6379/0"

[logging]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content, &no_env).unwrap();

        assert_eq!(config.port(), Some(9100));
        assert_eq!(config.database_url(), Some("postgres://app@db:5432/app"));
        assert_eq!(config.cache_url(), Some("redis://cache:6379/0"));
        assert_eq!(config.log_format(), Some(LogFormat::Json));
    }

    #[test]
    fn test_empty_file_is_valid() {
        let config = TomlConfig::from_toml_str("", &no_env).unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.port(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        let env: HashMap<&str, &str> = [("CACHE_HOST", "cache.internal")].into_iter().collect();
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let toml_content = r#"
[cache]
url = "redis://${CACHE_HOST}:6379"

[database]
url = "${UNDEFINED_DB}"
"#;

        let config = TomlConfig::from_toml_str(toml_content, &lookup).unwrap();
        assert_eq!(config.cache_url(), Some("redis://cache.internal:6379"));
        assert_eq!(config.database_url(), Some("${UNDEFINED_DB}"));
    }

    #[test]
    fn test_substitution_repeats_across_calls() {
        let lookup = |key: &str| (key == "PORT_VALUE").then(|| "9200".to_string());

        for _ in 0..3 {
            assert_eq!(
                substitute_env_vars("port = ${PORT_VALUE} # ${MISSING}", &lookup),
                "port = 9200 # ${MISSING}"
            );
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = TomlConfig::from_toml_str("[service]\nhost = \"0.0.0.0\"\n", &no_env).unwrap_err();
        assert!(matches!(err, ServiceError::ConfigParseError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[service]\nport = 7000\n").unwrap();

        let config = TomlConfig::from_file(temp_file.path(), &no_env).unwrap();
        assert_eq!(config.port(), Some(7000));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/service.toml", &no_env).unwrap_err();
        assert!(matches!(err, ServiceError::IoError(_)));
    }
}
