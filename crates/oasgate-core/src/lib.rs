//! Oasgate Core - request validation and error translation for serverless
//! gateway events
//!
//! This crate validates inbound gateway events against an OpenAPI document
//! and translates the typed failures an external request validator reports
//! into one canonical, addressable error record.
//!
//! # Main Components
//!
//! - **Error Translation**: the [`translate`] engine mapping parameter,
//!   body, and security failures to a [`CanonicalValidationError`]
//! - **Event Adaptation**: [`EventParser`] mapping gateway proxy events to
//!   a [`NormalizedRequest`]
//! - **Orchestration**: [`SpecValidator`] and [`ValidationMiddleware`]
//!   wiring spec loading, event parsing, and the external
//!   [`RequestValidator`] collaborator together
//!
//! The OpenAPI/JSON-Schema evaluation itself is deliberately not part of
//! this crate: callers plug a validator in behind the [`RequestValidator`]
//! trait, and this crate classifies and formats what it reports.
//!
//! # Example
//!
//! ```
//! use oasgate_core::{translate, ParameterLocation, RequestDescriptor, ValidationFailure};
//!
//! let request = RequestDescriptor::new("/pets", "post", "application/json");
//! let failure = ValidationFailure::MissingParameter {
//!     name: "limit".to_string(),
//!     location: ParameterLocation::Query,
//! };
//!
//! let error = translate(failure, &request).unwrap();
//! assert_eq!(error.name.as_deref(), Some("pets.parameters[limit]"));
//! ```

pub mod error;
pub mod event;
pub mod middleware;
pub mod translation;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use error::{Error, EventError, Result, TranslationError};
pub use event::{EventParser, NormalizedRequest, RequestParameters};
pub use middleware::{validate_request, ValidationMiddleware};
pub use translation::translate;
pub use types::{
    CanonicalValidationError, ParameterLocation, PathSegment, RequestDescriptor, SchemaError,
    ValidationFailure,
};
pub use validation::{RequestValidator, SpecValidator, ValidationOptions};

// Re-export the spec-document side for callers that only take this crate
pub use oasgate_schemas::{LoaderError, OpenApiVersion, SpecDocument, SpecLoader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
