use thiserror::Error;

/// Errors that can occur while loading a history configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse history config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read history config: {0}")]
    Read(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
