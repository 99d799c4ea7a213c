//! Core types for request validation and error translation
//!
//! This module defines the data structures the translation engine consumes
//! and produces: the request context used for error addressing, the typed
//! failure signals an external request validator reports, and the canonical
//! error record handed back to callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Immutable description of a normalized inbound request.
///
/// Used only as context for error-name construction; `path` is the
/// gateway's logical resource path, always starting with `/` and carrying
/// no query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// Normalized URL path, e.g. `/test-path/test-endpoint`
    pub path: String,
    /// Lowercased HTTP method, e.g. `post`
    pub method: String,
    /// Request content type, e.g. `application/json`
    pub mimetype: String,
}

impl RequestDescriptor {
    /// Create a request descriptor
    pub fn new(
        path: impl Into<String>,
        method: impl Into<String>,
        mimetype: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            mimetype: mimetype.into(),
        }
    }
}

/// Where a request parameter lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    Cookie,
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Query => "query",
            Self::Header => "header",
            Self::Path => "path",
            Self::Cookie => "cookie",
        };
        f.write_str(name)
    }
}

/// One step of a JSON-pointer-like path into a request body instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Array position
    Index(usize),
    /// Object property name
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Key(k) => f.write_str(k),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// One atomic constraint violation reported by the external body-schema
/// validator. Several may be reported for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaError {
    /// Human-readable violation text, e.g. `'x' is a required property`
    pub message: String,
    /// Path into the instance at which the violation occurred
    pub absolute_path: Vec<PathSegment>,
    /// The instance value that violated the constraint
    pub instance: Value,
    /// Name of the failed validator, e.g. `type` or `required`
    pub validator: String,
    /// The failed validator's configured value
    pub validator_value: Value,
}

/// Typed failure signal produced by an external request validator.
///
/// The translation engine classifies these by variant; anything a validator
/// cannot express in the closed set travels as [`ValidationFailure::Other`]
/// and is surfaced as an unhandled kind rather than a canonical error.
#[derive(Debug, Error)]
pub enum ValidationFailure {
    /// A required parameter is absent from query/header/path/cookie
    #[error("'{name}' is a required {location} parameter")]
    MissingParameter {
        name: String,
        location: ParameterLocation,
    },

    /// A parameter is present but cannot be cast to its declared type
    #[error("Parameter '{value}' is not of type: '{expected_type}'")]
    InvalidParameterType {
        value: String,
        expected_type: String,
    },

    /// No request body where one is required
    #[error("Missing required 'requestBody'")]
    MissingRequestBody,

    /// The request body fails one or more schema constraints
    #[error("request body does not conform to the operation schema")]
    InvalidSchemaValue {
        /// The violating body instance
        value: Value,
        /// Constraint violations, in the order the validator reported them
        schema_errors: Vec<SchemaError>,
    },

    /// No security-requirement alternative was satisfied
    #[error("no security requirement alternative was satisfied")]
    SecurityRequirementNotMet {
        /// Alternative groups of required scheme names, in spec order
        scheme_groups: Vec<Vec<String>>,
    },

    /// A failure kind outside the closed set, passed through untouched
    #[error("unclassified validation failure of kind '{kind}'")]
    Other {
        /// Runtime type name of the original failure
        kind: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ValidationFailure {
    /// Wrap an arbitrary error as an unclassified failure, recording its
    /// runtime type name as the kind tag.
    pub fn other<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other {
            kind: std::any::type_name::<E>().to_string(),
            source: anyhow::Error::new(source),
        }
    }
}

/// The single normalized error shape produced for every expected
/// validation failure.
///
/// Immutable once constructed. Whenever `name` is set, `path` holds the
/// same address decomposed into segments, and the address starts with the
/// request path in dot-notation.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub struct CanonicalValidationError {
    /// Legacy duplicate of `validation_message` without the trailing
    /// period; unset unless a caller needs both fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Human-readable, sentence-terminated description of the failure
    pub validation_message: String,

    /// Dotted/bracketed address of the failing part of the request,
    /// e.g. `test-path.test-endpoint.parameters[param_1]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `name` decomposed into its segments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,

    /// The offending value, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// The schema definition involved, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Value>,

    /// The failed validator's configured value, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Value>,

    /// Name of the failed validator, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_definition: Option<String>,
}

impl fmt::Display for CanonicalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Validation error at '{}': {}", name, self.validation_message),
            None => f.write_str(&self.validation_message),
        }
    }
}
