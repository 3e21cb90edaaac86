//! Encoding the model back into the describe JSON format.
//!
//! Output uses the tool's conventions: snake_case keys, one-element-array
//! payloads for requirements and library products, and the `type` field
//! for dependency kinds. Absent optional fields are omitted, so decoding
//! the output yields an equal [`Package`].

use serde_json::Value;

use crate::core::Package;

/// Encode a package as a JSON tree.
pub fn to_value(package: &Package) -> Result<Value, serde_json::Error> {
    serde_json::to_value(package)
}

/// Encode a package as pretty-printed JSON text.
pub fn to_string_pretty(package: &Package) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(package)
}
