//! Property-based tests for the error-addressing scheme
//!
//! These tests verify that `name` and `path` stay mutually derivable for
//! all identifier-shaped inputs, not just the fixtures the scenario tests
//! pin down.

use oasgate_core::translation::naming::{error_name, error_path};
use oasgate_core::RequestDescriptor;
use proptest::prelude::*;

// Strategy functions for property testing

/// Strategy for generating URL path segments
fn path_segment_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,11}"
}

/// Strategy for generating addressing tokens (parameter, property, or
/// scheme names)
fn token_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_ -]{0,15}"
}

proptest! {
    #[test]
    fn prop_name_and_path_are_mutually_derivable(
        segments in proptest::collection::vec(path_segment_strategy(), 1..4),
        section in prop_oneof![
            Just("parameters".to_string()),
            Just("requestBody".to_string()),
            Just("security".to_string()),
        ],
        token in token_strategy(),
    ) {
        let request = RequestDescriptor::new(
            format!("/{}", segments.join("/")),
            "post",
            "application/json",
        );

        let name = error_name(&request, &section, &token);
        let naive: Vec<String> = name
            .replace('[', ".")
            .replace(']', "")
            .split('.')
            .map(str::to_string)
            .collect();

        prop_assert_eq!(error_path(&name), naive);
    }

    #[test]
    fn prop_name_starts_with_dotted_request_path(
        segments in proptest::collection::vec(path_segment_strategy(), 1..4),
        token in token_strategy(),
    ) {
        let request = RequestDescriptor::new(
            format!("/{}", segments.join("/")),
            "get",
            "application/json",
        );

        let name = error_name(&request, "parameters", &token);

        prop_assert!(!name.is_empty());
        prop_assert!(name.starts_with(&segments.join(".")));
    }

    #[test]
    fn prop_path_ends_with_section_and_token(
        segments in proptest::collection::vec(path_segment_strategy(), 1..4),
        token in "[a-zA-Z_][a-zA-Z0-9_]{0,15}",
    ) {
        let request = RequestDescriptor::new(
            format!("/{}", segments.join("/")),
            "get",
            "application/json",
        );

        let path = error_path(&error_name(&request, "requestBody", &token));

        prop_assert_eq!(path.len(), segments.len() + 2);
        prop_assert_eq!(path[path.len() - 2].as_str(), "requestBody");
        prop_assert_eq!(path[path.len() - 1].as_str(), token.as_str());
    }
}
