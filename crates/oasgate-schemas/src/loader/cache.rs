//! Once-per-key caching for loaded spec documents
//!
//! Copyright (c) 2025 Oasgate Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::LoaderResult;
use crate::loader::spec_loader::SpecDocument;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// In-memory cache for loaded spec documents.
///
/// Entries are keyed by canonical file path and filled at most once per key.
/// There is no invalidation: a spec file is read, validated, and parsed on
/// first use and every later lookup for the same path returns the cached
/// document for the remainder of the process lifetime.
#[derive(Debug, Default)]
pub struct SpecCache {
    entries: HashMap<PathBuf, Arc<SpecDocument>>,
}

impl SpecCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached document if one exists for this path
    pub fn get(&self, path: &Path) -> Option<Arc<SpecDocument>> {
        self.entries.get(&Self::key(path)).cloned()
    }

    /// Get the document for `path`, loading and filling the entry on first use.
    ///
    /// `load` runs only when the key is absent; a failed load leaves the
    /// entry unfilled so the error is not cached.
    pub fn get_or_load<F>(&mut self, path: &Path, load: F) -> LoaderResult<Arc<SpecDocument>>
    where
        F: FnOnce(&Path) -> LoaderResult<SpecDocument>,
    {
        let key = Self::key(path);

        if let Some(document) = self.entries.get(&key) {
            return Ok(Arc::clone(document));
        }

        let document = Arc::new(load(path)?);
        self.entries.insert(key, Arc::clone(&document));
        Ok(document)
    }

    /// Whether a document is cached for this path
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(&Self::key(path))
    }

    /// Number of cached documents
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Canonicalize so `./api.yaml` and `api.yaml` share an entry. Falls back
    // to the raw path when the file does not exist yet.
    fn key(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::OpenApiVersion;
    use serde_json::json;
    use std::cell::Cell;

    fn document() -> SpecDocument {
        SpecDocument::new(
            json!({"openapi": "3.0.1", "paths": {}}),
            OpenApiVersion::new(3, 0, 1),
        )
    }

    #[test]
    fn test_fills_once_per_key() {
        let mut cache = SpecCache::new();
        let calls = Cell::new(0);

        for _ in 0..3 {
            let loaded = cache
                .get_or_load(Path::new("api.yaml"), |_| {
                    calls.set(calls.get() + 1);
                    Ok(document())
                })
                .unwrap();
            assert_eq!(loaded.version, OpenApiVersion::new(3, 0, 1));
        }

        assert_eq!(calls.get(), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(Path::new("api.yaml")));
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let mut cache = SpecCache::new();

        let result = cache.get_or_load(Path::new("api.yaml"), |path| {
            Err(crate::loader::LoaderError::file_not_found(
                path.to_path_buf(),
            ))
        });

        assert!(result.is_err());
        assert!(cache.is_empty());

        // The next attempt still runs the loader.
        let loaded = cache.get_or_load(Path::new("api.yaml"), |_| Ok(document()));
        assert!(loaded.is_ok());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_paths_get_distinct_entries() {
        let mut cache = SpecCache::new();

        cache
            .get_or_load(Path::new("a.yaml"), |_| Ok(document()))
            .unwrap();
        cache
            .get_or_load(Path::new("b.yaml"), |_| Ok(document()))
            .unwrap();

        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_get_without_fill() {
        let cache = SpecCache::new();
        assert!(cache.get(Path::new("missing.yaml")).is_none());
    }
}
