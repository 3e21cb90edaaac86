//! Package dependencies.
//!
//! A dependency names another package by identity and says where it comes
//! from: a local path, a source-control repository, or a registry.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::core::requirement::Requirement;
use crate::decode::container::{Decode, Object};
use crate::decode::{CodingPath, DecodeError};

/// The source kind of a dependency, as written in its `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    FileSystem,
    SourceControl,
    Registry,
}

impl DependencyKind {
    const TAGS: [&'static str; 3] = ["fileSystem", "sourceControl", "registry"];

    /// The tag used in the `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyKind::FileSystem => "fileSystem",
            DependencyKind::SourceControl => "sourceControl",
            DependencyKind::Registry => "registry",
        }
    }
}

impl Decode for DependencyKind {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        let tag = String::decode(value, path)?;
        match tag.as_str() {
            "fileSystem" => Ok(DependencyKind::FileSystem),
            "sourceControl" => Ok(DependencyKind::SourceControl),
            "registry" => Ok(DependencyKind::Registry),
            _ => Err(DecodeError::UnrecognizedTag {
                path: path.clone(),
                tag,
                expected: DependencyKind::TAGS.to_vec(),
            }),
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dependency on another package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dependency {
    /// A package on the local filesystem.
    FileSystem { identity: String, path: String },

    /// A package fetched from a source-control repository.
    SourceControl {
        identity: String,
        location: String,
        requirement: Requirement,
    },

    /// A package resolved through a package registry.
    Registry {
        identity: String,
        requirement: Requirement,
    },
}

impl Decode for Dependency {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        let object = Object::new(value, path)?;
        let kind: DependencyKind = object.required("type")?;
        let identity: String = object.required("identity")?;

        let dependency = match kind {
            DependencyKind::FileSystem => Dependency::FileSystem {
                identity,
                path: object.required("path")?,
            },
            DependencyKind::SourceControl => Dependency::SourceControl {
                identity,
                location: object.required_any(&["url", "location"])?,
                requirement: object.required("requirement")?,
            },
            DependencyKind::Registry => Dependency::Registry {
                identity,
                requirement: object.required("requirement")?,
            },
        };

        Ok(dependency)
    }
}

impl Dependency {
    /// The package identity.
    pub fn identity(&self) -> &str {
        match self {
            Dependency::FileSystem { identity, .. }
            | Dependency::SourceControl { identity, .. }
            | Dependency::Registry { identity, .. } => identity,
        }
    }

    /// The source kind.
    pub fn kind(&self) -> DependencyKind {
        match self {
            Dependency::FileSystem { .. } => DependencyKind::FileSystem,
            Dependency::SourceControl { .. } => DependencyKind::SourceControl,
            Dependency::Registry { .. } => DependencyKind::Registry,
        }
    }

    /// The version requirement (filesystem dependencies have none).
    pub fn requirement(&self) -> Option<&Requirement> {
        match self {
            Dependency::FileSystem { .. } => None,
            Dependency::SourceControl { requirement, .. }
            | Dependency::Registry { requirement, .. } => Some(requirement),
        }
    }

    /// Check if this is a filesystem dependency.
    pub fn is_file_system(&self) -> bool {
        matches!(self, Dependency::FileSystem { .. })
    }

    /// Check if this is a source-control dependency.
    pub fn is_source_control(&self) -> bool {
        matches!(self, Dependency::SourceControl { .. })
    }

    /// Check if this is a registry dependency.
    pub fn is_registry(&self) -> bool {
        matches!(self, Dependency::Registry { .. })
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dependency::FileSystem { identity, path } => write!(f, "{} ({})", identity, path),
            Dependency::SourceControl {
                identity,
                location,
                requirement,
            } => write!(f, "{} {} ({})", identity, requirement, location),
            Dependency::Registry {
                identity,
                requirement,
            } => write!(f, "{} {}", identity, requirement),
        }
    }
}

impl Serialize for Dependency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.kind().as_str())?;
        map.serialize_entry("identity", self.identity())?;
        match self {
            Dependency::FileSystem { path, .. } => map.serialize_entry("path", path)?,
            Dependency::SourceControl {
                location,
                requirement,
                ..
            } => {
                map.serialize_entry("url", location)?;
                map.serialize_entry("requirement", requirement)?;
            }
            Dependency::Registry { requirement, .. } => {
                map.serialize_entry("requirement", requirement)?
            }
        }
        map.end()
    }
}
