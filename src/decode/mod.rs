//! Decoding of `describe --type json` output into the package model.
//!
//! The pipeline is: JSON text → `serde_json::Value` → key normalization
//! (see [`keys`]) → [`Package`] decoded at the document root, which in turn
//! opens records, tagged unions, and one-element-array payloads through the
//! helpers in [`container`].

pub mod container;
pub mod error;
pub mod keys;
pub mod path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::Package;

pub use container::{Decode, Object, VariantDecoder};
pub use error::{DecodeError, DecodeErrorKind};
pub use keys::KeyDecodingStrategy;
pub use path::{CodingPath, PathSegment};

/// Decoder settings.
///
/// Deserializable so it can be embedded in a consumer's own configuration
/// file; every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// How object keys are normalized before decoding.
    #[serde(alias = "key-decoding")]
    pub key_decoding: KeyDecodingStrategy,
}

impl DecodeOptions {
    /// Options for input whose keys already use the model's camelCase names.
    pub fn with_default_keys() -> Self {
        DecodeOptions {
            key_decoding: KeyDecodingStrategy::UseDefaultKeys,
        }
    }
}

/// Decodes package descriptions with a fixed set of options.
///
/// Stateless between calls; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Decoder { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode UTF-8 JSON bytes.
    pub fn decode(&self, bytes: &[u8]) -> Result<Package, DecodeError> {
        let value: Value = serde_json::from_slice(bytes)?;
        self.decode_value(value)
    }

    /// Decode JSON text.
    pub fn decode_str(&self, text: &str) -> Result<Package, DecodeError> {
        let value: Value = serde_json::from_str(text)?;
        self.decode_value(value)
    }

    /// Decode an already-parsed JSON tree.
    pub fn decode_value(&self, mut value: Value) -> Result<Package, DecodeError> {
        self.options.key_decoding.apply(&mut value);
        Package::decode(&value, &CodingPath::root())
    }
}
