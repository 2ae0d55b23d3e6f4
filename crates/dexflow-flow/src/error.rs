//! Error handling for dexflow-flow
//!
//! `InvalidInput` is the only failure the graph builder itself produces. The
//! remaining variants come from the file, CSV and config edges around it.

use std::path::Path;
use thiserror::Error;

/// Result type for flow operations
pub type FlowResult<T> = std::result::Result<T, FlowError>;

/// Flow error types
#[derive(Error, Debug)]
pub enum FlowError {
    /// Malformed record or threshold rule
    #[error("Invalid input: {field} - {message}")]
    InvalidInput { field: String, message: String },

    /// Filesystem I/O errors
    #[error("File error: {path}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding errors
    #[error("CSV error in {path}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// JSON serialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing errors
    #[error("YAML parsing error: {message}")]
    Yaml {
        message: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl FlowError {
    /// Create a new invalid input error
    pub fn invalid_input<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new file error
    pub fn file<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::File {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create a new CSV error
    pub fn csv<P: AsRef<Path>>(path: P, source: csv::Error) -> Self {
        Self::Csv {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create a new serialization error
    pub fn serialization<S: Into<String>>(message: S, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a new YAML error
    pub fn yaml<S: Into<String>>(message: S, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            message: message.into(),
            source,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl From<serde_json::Error> for FlowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: err,
        }
    }
}

impl From<serde_yaml::Error> for FlowError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml {
            message: "YAML parsing failed".to_string(),
            source: err,
        }
    }
}
