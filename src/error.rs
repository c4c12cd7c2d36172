//! Error handling for the CV analyzer
//!
//! The analysis engine itself never fails; these errors come from the
//! surfaces around it (file input, configuration, report output).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, CvAnalyzerError>;

impl From<std::fmt::Error> for CvAnalyzerError {
    fn from(err: std::fmt::Error) -> Self {
        CvAnalyzerError::OutputFormatting(err.to_string())
    }
}
