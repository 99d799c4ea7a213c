//! Gateway middleware entry point
//!
//! The consumer-facing wiring: a middleware owns the spec path, the loader
//! cache, and the validator collaborator, and checks each inbound event
//! before the caller's handler runs. This is also the only layer that
//! logs; the translation engine itself stays silent.
//!
//! Copyright (c) 2025 Oasgate Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::event::NormalizedRequest;
use crate::validation::{RequestValidator, SpecValidator, ValidationOptions};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Request-validation middleware for serverless gateway handlers.
///
/// Construct once per process and call [`handle`](Self::handle) per event;
/// the spec document is loaded on the first event and cached for the
/// process lifetime.
#[derive(Debug)]
pub struct ValidationMiddleware<V> {
    oas_path: PathBuf,
    validator: SpecValidator<V>,
}

impl<V: RequestValidator> ValidationMiddleware<V> {
    /// Create a middleware over the spec at `oas_path` with default options
    pub fn new(oas_path: impl Into<PathBuf>, validator: V) -> Self {
        Self::with_options(oas_path, validator, ValidationOptions::default())
    }

    /// Create a middleware with explicit validation options
    pub fn with_options(
        oas_path: impl Into<PathBuf>,
        validator: V,
        options: ValidationOptions,
    ) -> Self {
        Self {
            oas_path: oas_path.into(),
            validator: SpecValidator::with_options(validator, options),
        }
    }

    /// Validate one gateway event, returning the normalized request on
    /// success so the handler can proceed with it.
    pub fn handle(&mut self, event: &Value) -> Result<NormalizedRequest> {
        log::debug!("validating event against '{}'", self.oas_path.display());

        match self
            .validator
            .validate_request_against_spec(&self.oas_path, event)
        {
            Ok(request) => {
                log::debug!(
                    "request {} {} passed validation",
                    request.descriptor.method,
                    request.descriptor.path
                );
                Ok(request)
            }
            Err(err) => {
                // A classification gap is a defect in this library, not a
                // caller input error; flag it for the maintainer.
                if matches!(err, Error::Translation(_)) {
                    log::error!("{err}");
                }
                Err(err)
            }
        }
    }
}

/// One-shot convenience: validate a single gateway event against the spec
/// at `oas_path` with default options.
pub fn validate_request<V: RequestValidator>(
    event: &Value,
    oas_path: impl AsRef<Path>,
    validator: V,
) -> Result<NormalizedRequest> {
    ValidationMiddleware::new(oas_path.as_ref(), validator).handle(event)
}
