//! Formatter for body-kind validation failures
//!
//! The violating property token is scraped out of the external validator's
//! human-readable message text. That coupling is inherently fragile, so it
//! is isolated here and pinned down by characterization tests on the exact
//! message wordings the validator is known to emit.
//!
//! Copyright (c) 2025 Oasgate Team
//! Licensed under the Apache-2.0 license

use crate::error::TranslationError;
use crate::translation::naming::{error_name, error_path};
use crate::types::{CanonicalValidationError, RequestDescriptor, SchemaError};
use serde_json::Value;

/// Format a request that is missing its required body.
pub(super) fn missing_body() -> CanonicalValidationError {
    CanonicalValidationError {
        message: None,
        validation_message: "Missing required 'requestBody'.".to_string(),
        name: None,
        path: None,
        value: None,
        definition: None,
        rule: None,
        rule_definition: None,
    }
}

/// Format a body that failed one or more schema constraints.
///
/// Only the first schema error contributes the address, value, and rule;
/// one representative failure is reported per request even when several
/// properties are invalid. An empty violation list is an invariant
/// violation on the validator's side and fails fast.
pub(super) fn invalid_schema_value(
    request: &RequestDescriptor,
    value: &Value,
    mut schema_errors: Vec<SchemaError>,
) -> Result<CanonicalValidationError, TranslationError> {
    if schema_errors.is_empty() {
        return Err(TranslationError::NoSchemaErrors);
    }
    let first = schema_errors.remove(0);

    let token = violating_token(&first.message, value);
    let name = error_name(request, "requestBody", &token);
    let path = error_path(&name);

    Ok(CanonicalValidationError {
        message: None,
        validation_message: format!("{}.", first.message),
        name: Some(name),
        path: Some(path),
        value: Some(first.instance),
        definition: None,
        rule: Some(first.validator_value),
        rule_definition: Some(first.validator),
    })
}

/// Extract the violating property token from a schema-error message.
///
/// The token is the first single-quoted substring. For `required`
/// violations the quoted text already is the property key. For any other
/// violation the quoted text is the offending value, and the token is
/// re-mapped to the property whose value renders equal to it; when no
/// property matches, the quoted text is kept as-is.
fn violating_token(message: &str, value: &Value) -> String {
    let quoted = regex::Regex::new(r"'([^']*)'").expect("Valid regex pattern");

    let Some(token) = quoted
        .captures(message)
        .map(|cap| cap[1].to_string())
    else {
        return String::new();
    };

    if message.contains("required") {
        return token;
    }

    value
        .as_object()
        .and_then(|map| {
            map.iter()
                .find(|(_, v)| value_text(v) == token)
                .map(|(k, _)| k.clone())
        })
        .unwrap_or(token)
}

// Render a JSON value the way it appears inside validator messages:
// strings unquoted, everything else in JSON notation.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
