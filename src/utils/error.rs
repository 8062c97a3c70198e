use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Request for {query} failed with status {status}")]
    HttpStatusError { query: String, status: u16 },

    #[error("All {attempts} attempts for {query} failed, last error: {last_error}")]
    LadderExhaustedError {
        query: String,
        attempts: usize,
        last_error: String,
    },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, AtlasError>;
