//! Minimum deployment platforms.

use serde::Serialize;
use serde_json::Value;

use crate::decode::container::{Decode, Object};
use crate::decode::{CodingPath, DecodeError};

/// A platform the package supports, with its minimum version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PlatformRestriction {
    /// Platform name, e.g. `macos` or `ios`.
    pub name: String,

    pub version: String,

    /// Free-form platform options; `None` when the key is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Decode for PlatformRestriction {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        let object = Object::new(value, path)?;
        Ok(PlatformRestriction {
            name: object.required("name")?,
            version: object.required("version")?,
            options: object.optional("options")?,
        })
    }
}
