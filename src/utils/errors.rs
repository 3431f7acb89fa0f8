use thiserror::Error;

#[derive(Error, Debug)]
pub enum MbtiDataError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Expected a JSON array of records in {0}")]
    NotARecordArray(String),

    #[error("Entry {index} is not a JSON object")]
    NotARecord { index: usize },

    #[error("Entry {index} is missing required field '{field}'")]
    MissingField { index: usize, field: String },

    #[error("Entry {index} has invalid field '{field}': expected {expected}")]
    InvalidField {
        index: usize,
        field: String,
        expected: &'static str,
    },

    #[error("Entry {index} has an unhashable '{field}' value (array or object)")]
    UnhashableLabel { index: usize, field: String },
}

pub type Result<T> = std::result::Result<T, MbtiDataError>;
