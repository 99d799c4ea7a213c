//! OpenAPI version extraction from spec documents
//!
//! Copyright (c) 2025 Oasgate Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// OpenAPI version triple as declared by a spec document's `openapi` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpenApiVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl OpenApiVersion {
    /// Create a version from its components
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string such as `"3.0.1"`.
    ///
    /// The patch component may be omitted (`"3.0"` parses as `3.0.0`);
    /// anything else is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split('.');

        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = match parts.next() {
            Some(part) => part.parse().ok()?,
            None => 0,
        };

        if parts.next().is_some() {
            return None;
        }

        Some(Self::new(major, minor, patch))
    }

    /// Extract the version from a parsed spec document
    pub fn from_document(document: &Value, path: &Path) -> LoaderResult<Self> {
        let raw = document
            .get("openapi")
            .and_then(|v| v.as_str())
            .ok_or_else(|| LoaderError::MissingVersion {
                path: path.to_path_buf(),
            })?;

        Self::parse(raw).ok_or_else(|| LoaderError::InvalidVersion {
            path: path.to_path_buf(),
            version: raw.to_string(),
        })
    }

    /// The `(major, minor)` release pair, e.g. `(3, 1)` for any 3.1.x document
    pub fn minor_release(&self) -> (u32, u32) {
        (self.major, self.minor)
    }
}

impl fmt::Display for OpenApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
