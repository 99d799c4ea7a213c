//! Formatter for parameter-kind validation failures
//!
//! Copyright (c) 2025 Oasgate Team
//! Licensed under the Apache-2.0 license

use crate::translation::naming::{error_name, error_path};
use crate::types::{CanonicalValidationError, ParameterLocation, RequestDescriptor};

/// Format a required parameter that is absent from its location.
pub(super) fn missing(
    request: &RequestDescriptor,
    name: &str,
    location: ParameterLocation,
) -> CanonicalValidationError {
    let validation_message = format!("'{name}' is a required {location} parameter.");
    let name = error_name(request, "parameters", name);
    let path = error_path(&name);

    CanonicalValidationError {
        message: None,
        validation_message,
        name: Some(name),
        path: Some(path),
        value: None,
        definition: None,
        rule: None,
        rule_definition: None,
    }
}

/// Format a parameter that failed the cast to its declared type.
///
/// Type casting fails before the parameter's logical name is known, so the
/// record carries only a message and no address.
pub(super) fn invalid_type(value: &str, expected_type: &str) -> CanonicalValidationError {
    CanonicalValidationError {
        message: None,
        validation_message: format!("Parameter '{value}' is not of type: '{expected_type}'."),
        name: None,
        path: None,
        value: None,
        definition: None,
        rule: None,
        rule_definition: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RequestDescriptor {
        RequestDescriptor::new("/test-path/test-endpoint", "post", "application/json")
    }

    #[test]
    fn test_missing_parameter() {
        let error = missing(&request(), "param_1", ParameterLocation::Query);

        assert_eq!(
            error.validation_message,
            "'param_1' is a required query parameter."
        );
        assert_eq!(
            error.name.as_deref(),
            Some("test-path.test-endpoint.parameters[param_1]")
        );
        assert_eq!(
            error.path,
            Some(vec![
                "test-path".to_string(),
                "test-endpoint".to_string(),
                "parameters".to_string(),
                "param_1".to_string(),
            ])
        );
        assert!(error.rule.is_none());
        assert!(error.value.is_none());
        assert!(error.message.is_none());
    }

    #[test]
    fn test_missing_header_parameter() {
        let error = missing(&request(), "X-Api-Key", ParameterLocation::Header);
        assert_eq!(
            error.validation_message,
            "'X-Api-Key' is a required header parameter."
        );
    }

    #[test]
    fn test_invalid_parameter_type_has_no_address() {
        let error = invalid_type("not an integer", "integer");

        assert_eq!(
            error.validation_message,
            "Parameter 'not an integer' is not of type: 'integer'."
        );
        assert!(error.name.is_none());
        assert!(error.path.is_none());
    }
}
