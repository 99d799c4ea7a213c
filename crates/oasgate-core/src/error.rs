//! Error types for the Oasgate core library
//!
//! Three families are kept type-distinct on purpose: expected validation
//! failures become a [`CanonicalValidationError`] inside
//! [`Error::SchemaValidation`]; classification gaps and broken invariants
//! travel as [`TranslationError`]; malformed gateway events travel as
//! [`EventError`]. Callers surface the first to API consumers and treat the
//! other two as internal faults.

use crate::types::CanonicalValidationError;
use oasgate_schemas::LoaderError;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for Oasgate operations
#[derive(Error, Debug)]
pub enum Error {
    /// An inbound request failed validation; the canonical record says
    /// which part and why
    #[error("Schema validation failed: {0}")]
    SchemaValidation(CanonicalValidationError),

    /// A failure kind could not be translated, or the failure payload
    /// violated a translation invariant
    #[error(transparent)]
    Translation(#[from] TranslationError),

    /// The gateway event is missing a required field
    #[error(transparent)]
    Event(#[from] EventError),

    /// The spec document could not be loaded
    #[error(transparent)]
    Loader(#[from] LoaderError),

    /// The spec document declares an OpenAPI version this library does
    /// not support
    #[error("Unsupported OpenAPI version: '{version}'")]
    UnsupportedOpenApiVersion { version: String },
}

impl Error {
    /// The canonical validation error, when this is an expected
    /// request-validation failure
    pub fn as_schema_validation(&self) -> Option<&CanonicalValidationError> {
        match self {
            Self::SchemaValidation(error) => Some(error),
            _ => None,
        }
    }
}

impl From<CanonicalValidationError> for Error {
    fn from(error: CanonicalValidationError) -> Self {
        Self::SchemaValidation(error)
    }
}

/// Failures of the translation engine itself, distinct from the canonical
/// validation errors it produces
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// No formatter is mapped for this failure kind. A classification gap
    /// in this library, never a caller input error.
    #[error(
        "'{kind}' is unhandled. Please open an issue on: \
         https://github.com/oasgate/oasgate/issues and it will be resolved ASAP!"
    )]
    Unhandled { kind: String },

    /// A schema-value failure arrived with an empty violation list
    #[error("Error has no Schema Error! Can't process errors")]
    NoSchemaErrors,

    /// A security failure arrived with no scheme names to address
    #[error("Security requirement has no scheme names! Can't process errors")]
    NoSecuritySchemes,
}

/// Failures while mapping a gateway event into a normalized request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// A required event field is absent
    #[error("'{field}' missing from event.")]
    MissingField { field: &'static str },

    /// The event payload is not a JSON object
    #[error("event is not a JSON object")]
    NotAnObject,
}
