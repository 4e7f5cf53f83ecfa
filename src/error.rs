use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Network error: {0}")]
    Network(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid target format: {0}")]
    InvalidTarget(String),

    #[error("Timeout occurred during {operation}")]
    Timeout { operation: String },

    #[error("Export error: {0}")]
    Export(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
