//! Oasgate Schemas - OpenAPI spec-document loading for Oasgate
//!
//! This crate owns the file-facing side of Oasgate: locating an OpenAPI
//! document on disk, detecting its format, parsing it to a JSON value, and
//! extracting the declared OpenAPI version. Documents are memoized per file
//! path and never re-read within a process lifetime.
//!
//! Semantic validation of the spec itself, and validation of requests
//! against it, are deliberately out of scope here; this crate only hands a
//! parsed [`SpecDocument`] to the validation layer.
//!
//! # Quick Start
//!
//! ```no_run
//! use oasgate_schemas::SpecLoader;
//! use std::path::Path;
//!
//! # fn example() -> oasgate_schemas::LoaderResult<()> {
//! let mut loader = SpecLoader::new();
//! let document = loader.load(Path::new("openapi.yaml"))?;
//! println!("OpenAPI {}", document.version);
//! # Ok(())
//! # }
//! ```
//!
//! Copyright (c) 2025 Oasgate Team
//! Licensed under the Apache-2.0 license

pub mod loader;
pub mod version;

pub use loader::{Format, LoaderError, LoaderResult, SpecCache, SpecDocument, SpecLoader, SpecParser};
pub use version::OpenApiVersion;
