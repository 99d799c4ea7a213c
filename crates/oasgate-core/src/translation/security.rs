//! Formatter for security-kind validation failures
//!
//! Copyright (c) 2025 Oasgate Team
//! Licensed under the Apache-2.0 license

use crate::error::TranslationError;
use crate::translation::naming::{error_name, error_path};
use crate::types::{CanonicalValidationError, RequestDescriptor};

/// Format a request that satisfied none of the security-requirement
/// alternatives.
///
/// The first scheme of the first alternative group addresses the error;
/// the message renders every group so callers still see all accepted
/// alternatives.
pub(super) fn requirement_not_met(
    request: &RequestDescriptor,
    scheme_groups: &[Vec<String>],
) -> Result<CanonicalValidationError, TranslationError> {
    let token = scheme_groups
        .first()
        .and_then(|group| group.first())
        .ok_or(TranslationError::NoSecuritySchemes)?;

    let name = error_name(request, "security", token);
    let path = error_path(&name);

    Ok(CanonicalValidationError {
        message: None,
        validation_message: format!(
            "'{}' are required security scheme(s).",
            render_scheme_groups(scheme_groups)
        ),
        name: Some(name),
        path: Some(path),
        value: None,
        definition: None,
        rule: None,
        rule_definition: None,
    })
}

// Renders [["BasicAuth"], ["ApiKey", "OAuth2"]] as
// [['BasicAuth'], ['ApiKey', 'OAuth2']].
fn render_scheme_groups(scheme_groups: &[Vec<String>]) -> String {
    let groups: Vec<String> = scheme_groups
        .iter()
        .map(|group| {
            let schemes: Vec<String> = group.iter().map(|s| format!("'{s}'")).collect();
            format!("[{}]", schemes.join(", "))
        })
        .collect();

    format!("[{}]", groups.join(", "))
}
