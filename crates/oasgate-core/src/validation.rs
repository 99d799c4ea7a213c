//! Request-validation orchestration
//!
//! Ties the collaborators together: load the spec document, gate on a
//! supported OpenAPI version, map the gateway event to a normalized
//! request, run the external request validator, and translate any failure
//! it reports into the canonical error shape.
//!
//! The validation algorithm itself stays external behind
//! [`RequestValidator`]; this module only orchestrates and translates.
//!
//! Copyright (c) 2025 Oasgate Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::event::{EventParser, NormalizedRequest};
use crate::translation::translate;
use crate::types::ValidationFailure;
use oasgate_schemas::{SpecDocument, SpecLoader};
use serde_json::Value;
use std::path::Path;

/// OpenAPI minor releases this library knows how to orchestrate
const SUPPORTED_MINOR_RELEASES: [(u32, u32); 2] = [(3, 0), (3, 1)];

/// How the external validator collaborator should report failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Surface the underlying typed failure instead of a wrapped,
    /// suppressed form. Translation needs the typed signal, so this
    /// defaults to `true`.
    pub expose_underlying_errors: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            expose_underlying_errors: true,
        }
    }
}

/// The external request-validation collaborator.
///
/// Implementations evaluate the normalized request against the spec
/// document and report the first failure as a typed
/// [`ValidationFailure`]. Failure kinds outside the closed set must be
/// passed through as [`ValidationFailure::Other`], untouched.
pub trait RequestValidator {
    fn validate(
        &self,
        spec: &SpecDocument,
        request: &NormalizedRequest,
        options: &ValidationOptions,
    ) -> std::result::Result<(), ValidationFailure>;
}

/// Validates gateway events against a spec document via an external
/// [`RequestValidator`], translating failures on the way out.
#[derive(Debug)]
pub struct SpecValidator<V> {
    loader: SpecLoader,
    validator: V,
    options: ValidationOptions,
}

impl<V: RequestValidator> SpecValidator<V> {
    /// Create a spec validator with default options
    pub fn new(validator: V) -> Self {
        Self::with_options(validator, ValidationOptions::default())
    }

    /// Create a spec validator with explicit options
    pub fn with_options(validator: V, options: ValidationOptions) -> Self {
        Self {
            loader: SpecLoader::new(),
            validator,
            options,
        }
    }

    /// Validate a gateway event against the spec at `oas_path`.
    ///
    /// Returns the normalized request on success so the caller's handler
    /// can proceed with it.
    pub fn validate_request_against_spec(
        &mut self,
        oas_path: &Path,
        event: &Value,
    ) -> Result<NormalizedRequest> {
        let spec = self.loader.load(oas_path)?;
        check_version(&spec)?;

        let request = EventParser::new(event).event_to_request()?;

        if let Err(failure) = self.validator.validate(&spec, &request, &self.options) {
            return Err(raise_schema_validation_error(failure, &request));
        }

        Ok(request)
    }
}

/// Map a validator failure into the error the caller sees: a canonical
/// validation error for expected kinds, a translation fault otherwise.
fn raise_schema_validation_error(failure: ValidationFailure, request: &NormalizedRequest) -> Error {
    match translate(failure, &request.descriptor) {
        Ok(canonical) => Error::SchemaValidation(canonical),
        Err(translation) => Error::Translation(translation),
    }
}

fn check_version(spec: &SpecDocument) -> Result<()> {
    if SUPPORTED_MINOR_RELEASES.contains(&spec.version.minor_release()) {
        Ok(())
    } else {
        Err(Error::UnsupportedOpenApiVersion {
            version: spec.version.to_string(),
        })
    }
}
