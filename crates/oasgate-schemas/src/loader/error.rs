//! Error types for spec-document loading operations
//!
//! Copyright (c) 2025 Oasgate Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Error types for spec-document loading operations
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The spec file does not exist
    #[error("File does not exist on path: '{path}'")]
    FileNotFound { path: PathBuf },

    /// Unsupported file format
    #[error("'.{extension}' not supported. Only '.json', '.yaml' and '.yml'")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document root is not a JSON object
    #[error("Spec document '{path}' must be a JSON object at the root level")]
    NotAnObject { path: PathBuf },

    /// The document carries no `openapi` version field
    #[error("'openapi' field missing from spec document '{path}'")]
    MissingVersion { path: PathBuf },

    /// The document's `openapi` field is not a version triple
    #[error("Invalid OpenAPI version '{version}' in '{path}'")]
    InvalidVersion { path: PathBuf, version: String },
}

impl LoaderError {
    /// Create a file-not-found error
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create an unsupported-format error
    pub fn unsupported_format(path: PathBuf) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_string();
        Self::UnsupportedFormat { path, extension }
    }

    /// Create an I/O error with path context
    pub fn io_error(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse_error(path: PathBuf, source: serde_yaml::Error) -> Self {
        Self::YamlParse { path, source }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: PathBuf, source: serde_json::Error) -> Self {
        Self::JsonParse { path, source }
    }
}
