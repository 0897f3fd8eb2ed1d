use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Missing required configuration: {field}")]
    ConfigurationMissing { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{service} returned HTTP {status}: {body}")]
    Upstream {
        service: String,
        status: u16,
        body: String,
    },

    #[error("Malformed response from {service}: {message}")]
    MalformedResponse { service: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Coarse grouping used to decide whether a failure is fatal for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Network,
    Upstream,
}

impl AlertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AlertError::ConfigurationMissing { .. }
            | AlertError::InvalidConfigValue { .. }
            | AlertError::Io(_)
            | AlertError::ConfigParse(_) => ErrorKind::Configuration,
            AlertError::Network(_) => ErrorKind::Network,
            AlertError::Upstream { .. } | AlertError::MalformedResponse { .. } => {
                ErrorKind::Upstream
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AlertError::ConfigurationMissing { field } => {
                format!("Export {} with a non-empty value before running", field)
            }
            AlertError::InvalidConfigValue { field, .. } => {
                format!("Fix the value of '{}' in the config file or CLI flags", field)
            }
            AlertError::Network(e) if e.is_timeout() => {
                "The request timed out; it will be attempted again on the next scheduled run"
                    .to_string()
            }
            AlertError::Network(_) => "Check network connectivity to the upstream API".to_string(),
            AlertError::Upstream { status: 401, .. } | AlertError::Upstream { status: 403, .. } => {
                "Check that the API key or token is valid".to_string()
            }
            AlertError::Upstream { .. } => {
                "The upstream service rejected the request; inspect the body above".to_string()
            }
            AlertError::MalformedResponse { .. } => {
                "The upstream response format may have changed".to_string()
            }
            AlertError::Io(_) => "Check that the config file path exists and is readable".to_string(),
            AlertError::ConfigParse(_) => "Check the TOML syntax of the config file".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AlertError>;
