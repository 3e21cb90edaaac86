//! Resources bundled with a target.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::decode::container::{Decode, Object, VariantDecoder};
use crate::decode::{CodingPath, DecodeError};

/// How a resource file is handled at build time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Processed by the build (e.g. compiled asset catalogs), optionally
    /// scoped to a localization.
    Process { localization: Option<String> },
    /// Copied verbatim.
    Copy,
    /// Embedded into the target's code as a byte array.
    EmbedInCode,
}

const RULE_VARIANTS: &[(&str, VariantDecoder<Rule>)] = &[
    ("process", |value, path| {
        let payload = Object::new(value, path)?;
        Ok(Rule::Process {
            localization: payload.optional("localization")?,
        })
    }),
    ("copy", |_, _| Ok(Rule::Copy)),
    ("embedInCode", |_, _| Ok(Rule::EmbedInCode)),
];

impl Decode for Rule {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        Object::new(value, path)?.decode_variant(RULE_VARIANTS)
    }
}

#[derive(Serialize)]
struct ProcessPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    localization: Option<&'a String>,
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Rule::Process { localization } => map.serialize_entry(
                "process",
                &ProcessPayload {
                    localization: localization.as_ref(),
                },
            )?,
            Rule::Copy => map.serialize_entry("copy", &Map::new())?,
            Rule::EmbedInCode => map.serialize_entry("embed_in_code", &Map::new())?,
        }
        map.end()
    }
}

/// A resource file and the rule applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Resource {
    pub rule: Rule,
    pub path: String,
}

impl Decode for Resource {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        let object = Object::new(value, path)?;
        Ok(Resource {
            rule: object.required("rule")?,
            path: object.required("path")?,
        })
    }
}
