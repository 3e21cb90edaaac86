//! Test utilities for described-package unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::test_support::{decode_fixture, DescriptionFixture};
//!
//! #[test]
//! fn test_example() {
//!     let package = decode_fixture(&DescriptionFixture::new("demo").library("Demo").to_text());
//!     assert_eq!(package.targets.len(), 1);
//! }
//! ```

pub mod fixtures;

use serde_json::Value;

use crate::core::Package;
use crate::decode::{DecodeError, Decoder};

// Re-export fixtures for convenience
pub use fixtures::*;

/// Decode a snake_case description, panicking with the rendered diagnostic
/// if it fails.
pub fn decode_fixture(json: &str) -> Package {
    match Decoder::default().decode_str(json) {
        Ok(package) => package,
        Err(err) => panic!("fixture failed to decode:\n{}", err.to_diagnostic()),
    }
}

/// Decode a snake_case description and return the error it must fail with.
pub fn decode_fixture_err(json: Value) -> DecodeError {
    match Decoder::default().decode_value(json) {
        Ok(package) => panic!("expected decode failure, got package `{}`", package.name),
        Err(err) => err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodeErrorKind;
    use serde_json::json;

    #[test]
    fn test_fixture_builder_decodes() {
        let package = decode_fixture(
            &DescriptionFixture::new("demo")
                .library("Demo")
                .target("DemoTests", "test", &["DemoTests.swift"])
                .to_text(),
        );

        assert_eq!(package.name, "demo");
        assert_eq!(package.products.len(), 1);
        assert_eq!(package.targets.len(), 2);
        assert_eq!(package.targets[0].sources, vec!["Demo.swift"]);
    }

    #[test]
    fn test_fixture_builder_with_bad_dependency() {
        let json = DescriptionFixture::new("demo")
            .dependency(json!({ "type": "git", "identity": "x" }))
            .to_json();

        let err = decode_fixture_err(json);
        assert_eq!(err.kind(), DecodeErrorKind::UnrecognizedTag);
        assert_eq!(err.path().unwrap().to_string(), "dependencies[0].type");
    }
}
