//! Error-translation engine for request-validation failures
//!
//! This module maps the heterogeneous failure signals an external request
//! validator reports into one canonical, addressable error record. It is
//! the only part of the library with real decision logic: a closed match
//! over failure kinds dispatches to one formatter each for parameter, body,
//! and security failures, and anything outside the closed set is surfaced
//! as an unhandled kind rather than silently converted.
//!
//! Translation is a pure function of `(failure, request)`: no shared state,
//! no I/O, no logging, safe to call concurrently without coordination.
//!
//! Copyright (c) 2025 Oasgate Team
//! Licensed under the Apache-2.0 license

mod body;
mod parameter;
mod security;

pub mod naming;

use crate::error::TranslationError;
use crate::types::{CanonicalValidationError, RequestDescriptor, ValidationFailure};

/// Translate a request-validation failure into the canonical error record.
///
/// Every expected failure kind (parameter, body, security) yields a
/// [`CanonicalValidationError`]. An [`ValidationFailure::Other`] yields
/// [`TranslationError::Unhandled`] carrying the original failure's runtime
/// type name: a classification gap to be fixed here, never end-user-facing
/// validation feedback.
///
/// # Example
///
/// ```
/// use oasgate_core::{translate, ParameterLocation, RequestDescriptor, ValidationFailure};
///
/// let request = RequestDescriptor::new("/test-path/test-endpoint", "post", "application/json");
/// let failure = ValidationFailure::MissingParameter {
///     name: "param_1".to_string(),
///     location: ParameterLocation::Query,
/// };
///
/// let error = translate(failure, &request).unwrap();
/// assert_eq!(error.validation_message, "'param_1' is a required query parameter.");
/// assert_eq!(error.name.as_deref(), Some("test-path.test-endpoint.parameters[param_1]"));
/// ```
///
/// # Errors
///
/// Returns [`TranslationError::Unhandled`] for an unclassified failure
/// kind, and [`TranslationError::NoSchemaErrors`] /
/// [`TranslationError::NoSecuritySchemes`] when a failure payload violates
/// the translation invariants.
pub fn translate(
    failure: ValidationFailure,
    request: &RequestDescriptor,
) -> Result<CanonicalValidationError, TranslationError> {
    match failure {
        ValidationFailure::MissingParameter { name, location } => {
            Ok(parameter::missing(request, &name, location))
        }
        ValidationFailure::InvalidParameterType {
            value,
            expected_type,
        } => Ok(parameter::invalid_type(&value, &expected_type)),
        ValidationFailure::MissingRequestBody => Ok(body::missing_body()),
        ValidationFailure::InvalidSchemaValue {
            value,
            schema_errors,
        } => body::invalid_schema_value(request, &value, schema_errors),
        ValidationFailure::SecurityRequirementNotMet { scheme_groups } => {
            security::requirement_not_met(request, &scheme_groups)
        }
        ValidationFailure::Other { kind, .. } => Err(TranslationError::Unhandled { kind }),
    }
}
