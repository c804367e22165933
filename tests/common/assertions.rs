//! Custom assertion macros and utilities
//!
//! Assertions over the JSON error envelope returned by every failing route.

/// Assert that a response body is the error envelope with the given `err`
///
/// Checks `success: false`, an empty `data` object and the `err` value.
#[macro_export]
macro_rules! assert_error_body {
    ($body:expr, $err:expr) => {{
        let body: &serde_json::Value = &$body;
        assert_eq!(body["success"], serde_json::json!(false), "body: {}", body);
        assert_eq!(body["data"], serde_json::json!({}), "body: {}", body);
        assert_eq!(body["err"], serde_json::json!($err), "body: {}", body);
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
