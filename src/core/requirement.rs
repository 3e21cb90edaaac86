//! Version requirements attached to source-control and registry dependencies.

use std::fmt;

use semver::VersionReq;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::decode::container::{unwrap_single, Decode, Object, VariantDecoder};
use crate::decode::{CodingPath, DecodeError};

/// A pair of bounds of the same type.
///
/// Equality and ordering are structural (lower bound first). The range is
/// half-open: `lower_bound` is included, `upper_bound` is not.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Range<T> {
    pub lower_bound: T,
    pub upper_bound: T,
}

impl<T> Range<T> {
    pub fn new(lower_bound: T, upper_bound: T) -> Self {
        Range {
            lower_bound,
            upper_bound,
        }
    }
}

impl<T: PartialOrd> Range<T> {
    /// Whether `value` lies in `lower_bound..upper_bound`.
    pub fn contains(&self, value: &T) -> bool {
        &self.lower_bound <= value && value < &self.upper_bound
    }
}

impl<T: Decode> Decode for Range<T> {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        let object = Object::new(value, path)?;
        Ok(Range {
            lower_bound: object.required("lowerBound")?,
            upper_bound: object.required("upperBound")?,
        })
    }
}

/// How a dependency's acceptable versions are pinned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Requirement {
    Exact(String),
    Range(Range<String>),
    Revision(String),
    Branch(String),
}

const REQUIREMENT_VARIANTS: &[(&str, VariantDecoder<Requirement>)] = &[
    ("exact", |value, path| unwrap_single(value, path).map(Requirement::Exact)),
    ("range", |value, path| unwrap_single(value, path).map(Requirement::Range)),
    ("revision", |value, path| unwrap_single(value, path).map(Requirement::Revision)),
    ("branch", |value, path| unwrap_single(value, path).map(Requirement::Branch)),
];

impl Decode for Requirement {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        Object::new(value, path)?.decode_variant(REQUIREMENT_VARIANTS)
    }
}

impl Requirement {
    /// The JSON key that selects this variant.
    pub fn tag(&self) -> &'static str {
        match self {
            Requirement::Exact(_) => "exact",
            Requirement::Range(_) => "range",
            Requirement::Revision(_) => "revision",
            Requirement::Branch(_) => "branch",
        }
    }

    /// Whether this requirement is expressed in versions (exact or range).
    pub fn is_version_based(&self) -> bool {
        matches!(self, Requirement::Exact(_) | Requirement::Range(_))
    }

    /// Convert a version-based requirement to a semver requirement.
    ///
    /// `exact` becomes `=v` and `range` becomes `>=lower, <upper`. Revision
    /// and branch pins have no version equivalent and yield `Ok(None)`.
    pub fn version_req(&self) -> Result<Option<VersionReq>, semver::Error> {
        let req = match self {
            Requirement::Exact(version) => format!("={}", version),
            Requirement::Range(range) => {
                format!(">={}, <{}", range.lower_bound, range.upper_bound)
            }
            Requirement::Revision(_) | Requirement::Branch(_) => return Ok(None),
        };
        req.parse().map(Some)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Exact(version) => write!(f, "{}", version),
            Requirement::Range(range) => {
                write!(f, "{}..<{}", range.lower_bound, range.upper_bound)
            }
            Requirement::Revision(revision) => write!(f, "revision {}", revision),
            Requirement::Branch(branch) => write!(f, "branch {}", branch),
        }
    }
}

impl Serialize for Requirement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Requirement::Exact(version) => map.serialize_entry("exact", &[version])?,
            Requirement::Range(range) => map.serialize_entry("range", &[range])?,
            Requirement::Revision(revision) => map.serialize_entry("revision", &[revision])?,
            Requirement::Branch(branch) => map.serialize_entry("branch", &[branch])?,
        }
        map.end()
    }
}
