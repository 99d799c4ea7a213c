//! Spec-document loading with file validation and caching
//!
//! Copyright (c) 2025 Oasgate Team
//! Licensed under the Apache-2.0 license

use crate::loader::cache::SpecCache;
use crate::loader::error::{LoaderError, LoaderResult};
use crate::loader::parser::SpecParser;
use crate::version::OpenApiVersion;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

/// A parsed spec document together with its declared OpenAPI version
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    /// The parsed document content
    pub content: Value,
    /// The version declared by the document's `openapi` field
    pub version: OpenApiVersion,
}

impl SpecDocument {
    /// Create a spec document from parsed content and its version
    pub fn new(content: Value, version: OpenApiVersion) -> Self {
        Self { content, version }
    }
}

/// Loader for OpenAPI spec documents.
///
/// Validates that the file exists and carries a supported extension, parses
/// it to a JSON value, extracts the declared OpenAPI version, and memoizes
/// the result per file path for the process lifetime.
#[derive(Debug, Default)]
pub struct SpecLoader {
    cache: SpecCache,
}

impl SpecLoader {
    /// Create a new spec loader with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the spec document at `path`, reading the file at most once
    pub fn load(&mut self, path: &Path) -> LoaderResult<Arc<SpecDocument>> {
        self.cache.get_or_load(path, Self::read)
    }

    /// Whether the document at `path` has already been loaded
    pub fn is_loaded(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }

    fn read(path: &Path) -> LoaderResult<SpecDocument> {
        if !path.is_file() {
            return Err(LoaderError::file_not_found(path.to_path_buf()));
        }

        let content = SpecParser::new().parse_file(path)?;
        let version = OpenApiVersion::from_document(&content, path)?;

        Ok(SpecDocument::new(content, version))
    }
}
