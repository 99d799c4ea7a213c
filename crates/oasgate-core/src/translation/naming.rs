//! Dotted/bracketed error addressing
//!
//! Copyright (c) 2025 Oasgate Team
//! Licensed under the Apache-2.0 license

use crate::types::RequestDescriptor;

/// Build the dotted/bracketed address of a failing request part.
///
/// The request path is converted to dot-notation (leading `/` stripped,
/// internal `/` replaced with `.`) and suffixed with `.section[token]`:
///
/// ```
/// use oasgate_core::translation::naming::error_name;
/// use oasgate_core::RequestDescriptor;
///
/// let request = RequestDescriptor::new("/test-path/test-endpoint", "post", "application/json");
/// assert_eq!(
///     error_name(&request, "parameters", "param_1"),
///     "test-path.test-endpoint.parameters[param_1]",
/// );
/// ```
pub fn error_name(request: &RequestDescriptor, section: &str, token: &str) -> String {
    let dotted = request.path.replace('/', ".");
    let dotted = dotted.trim_start_matches('.');

    format!("{dotted}.{section}[{token}]")
}

/// Decompose an error address into its segments.
///
/// `[` becomes `.`, `]` is removed, and the result is split on `.`. Empty
/// segments are dropped at the edges only, never internally; an address
/// produced by [`error_name`] never contains internal empties.
pub fn error_path(name: &str) -> Vec<String> {
    let flat = name.replace('[', ".").replace(']', "");
    let mut segments: Vec<&str> = flat.split('.').collect();

    while segments.first().is_some_and(|s| s.is_empty()) {
        segments.remove(0);
    }
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }

    segments.into_iter().map(str::to_string).collect()
}
