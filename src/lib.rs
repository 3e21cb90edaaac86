//! described-package - a typed model of `describe --type json` package descriptions
//!
//! This crate decodes the JSON a package-management tool emits when asked to
//! describe a package into an immutable, strongly-typed [`Package`]. The
//! schema's ad-hoc encodings (snake_case keys, tagged unions selected by key
//! presence, payloads wrapped in one-element arrays) are resolved here so
//! consumers only ever see closed Rust enums.
//!
//! ```
//! let json = br#"{
//!     "name": "demo",
//!     "manifest_display_name": "Demo",
//!     "path": "/work/demo",
//!     "tools_version": "5.9",
//!     "dependencies": [],
//!     "platforms": [],
//!     "products": [
//!         { "name": "Demo", "targets": ["Demo"], "type": { "library": ["automatic"] } }
//!     ],
//!     "targets": [
//!         { "name": "Demo", "type": "library", "path": "Sources/Demo", "sources": ["Demo.swift"] }
//!     ]
//! }"#;
//!
//! let package = described_package::decode(json).unwrap();
//! assert_eq!(package.targets[0].sources, ["Demo.swift"]);
//! ```

pub mod core;
pub mod decode;
pub mod encode;
pub mod util;

/// Test fixtures for unit tests.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    CommandIntent, Dependency, DependencyKind, LibraryType, NetworkScope, Package, Permission,
    PlatformRestriction, PluginCapability, Product, ProductType, Range, Requirement, Resource,
    Rule, Target, TargetKind,
};
pub use crate::decode::{
    CodingPath, DecodeError, DecodeErrorKind, DecodeOptions, Decoder, KeyDecodingStrategy,
};

/// Decode UTF-8 JSON bytes with the default options.
pub fn decode(bytes: &[u8]) -> Result<Package, DecodeError> {
    Decoder::default().decode(bytes)
}

/// Decode JSON text with the default options.
pub fn decode_str(text: &str) -> Result<Package, DecodeError> {
    Decoder::default().decode_str(text)
}
