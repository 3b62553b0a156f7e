use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error in {source_name}: {message}")]
    ConfigParseError { source_name: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to bind {addr}: {source}")]
    BindError {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Use case failed: {message}")]
    UseCaseError { message: String },
}

impl ServiceError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ServiceError::IoError(_) => "An I/O operation failed".to_string(),
            ServiceError::ConfigParseError { source_name, .. } => {
                format!("Could not read configuration from {}", source_name)
            }
            ServiceError::InvalidConfigValueError { field, value, .. } => {
                format!("Configuration value '{}' for {} is not valid", value, field)
            }
            ServiceError::BindError { addr, .. } => {
                format!("Could not listen on {}", addr)
            }
            ServiceError::UseCaseError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ServiceError::IoError(_) => "Check file permissions and available disk space",
            ServiceError::ConfigParseError { .. } => {
                "Check the TOML syntax of the configuration file"
            }
            ServiceError::InvalidConfigValueError { .. } => {
                "Fix the environment variable or config entry and restart"
            }
            ServiceError::BindError { .. } => {
                "Make sure the port is free or choose another one with PORT"
            }
            ServiceError::UseCaseError { .. } => "Retry the request or inspect the service logs",
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
