//! Target definitions - the modules a package is built from.
//!
//! A target keeps its raw `type` tag exactly as described; [`TargetKind`]
//! is a typed view over the tags this crate knows.

mod plugin;
mod resource;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::decode::container::{Decode, Object};
use crate::decode::{CodingPath, DecodeError};

pub use self::plugin::{CommandIntent, NetworkScope, Permission, PluginCapability};
pub use self::resource::{Resource, Rule};

/// The known target type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Executable,
    Library,
    Test,
    Macro,
    Plugin,
    Snippet,
    /// A system library target (`system-target`).
    SystemTarget,
    /// A prebuilt binary target.
    Binary,
}

impl TargetKind {
    /// Get the tag as it appears in the description.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Executable => "executable",
            TargetKind::Library => "library",
            TargetKind::Test => "test",
            TargetKind::Macro => "macro",
            TargetKind::Plugin => "plugin",
            TargetKind::Snippet => "snippet",
            TargetKind::SystemTarget => "system-target",
            TargetKind::Binary => "binary",
        }
    }
}

impl FromStr for TargetKind {
    type Err = TargetKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "executable" => Ok(TargetKind::Executable),
            "library" | "regular" => Ok(TargetKind::Library),
            "test" => Ok(TargetKind::Test),
            "macro" => Ok(TargetKind::Macro),
            "plugin" => Ok(TargetKind::Plugin),
            "snippet" => Ok(TargetKind::Snippet),
            "system-target" | "system" => Ok(TargetKind::SystemTarget),
            "binary" => Ok(TargetKind::Binary),
            _ => Err(TargetKindParseError(s.to_string())),
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a target type tag is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown target type: `{0}`")]
pub struct TargetKindParseError(pub String);

/// A target of the package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Target {
    pub name: String,

    /// Raw type tag, e.g. `library`, `executable`, `test`.
    #[serde(rename = "type")]
    pub target_type: String,

    /// The name as a valid C identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c99name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_capability: Option<PluginCapability>,

    /// Target directory, relative to the package root.
    pub path: String,

    /// Source files, relative to `path`, in description order.
    pub sources: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_dependencies: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_dependencies: Option<Vec<String>>,

    /// Products this target is part of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_memberships: Option<Vec<String>>,
}

impl Decode for Target {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        let object = Object::new(value, path)?;
        Ok(Target {
            name: object.required("name")?,
            target_type: object.required("type")?,
            c99name: object.optional("c99name")?,
            module_type: object.optional("moduleType")?,
            plugin_capability: object.optional("pluginCapability")?,
            path: object.required("path")?,
            sources: object.required("sources")?,
            resources: object.optional("resources")?,
            target_dependencies: object.optional("targetDependencies")?,
            product_dependencies: object.optional("productDependencies")?,
            product_memberships: object.optional("productMemberships")?,
        })
    }
}

impl Target {
    /// The typed kind, if the raw tag is one this crate knows.
    pub fn kind(&self) -> Option<TargetKind> {
        self.target_type.parse().ok()
    }

    /// Check if this is a test target.
    pub fn is_test(&self) -> bool {
        self.kind() == Some(TargetKind::Test)
    }

    /// Names of the targets this target depends on.
    pub fn target_dependencies(&self) -> &[String] {
        self.target_dependencies.as_deref().unwrap_or_default()
    }

    /// Names of the products this target depends on.
    pub fn product_dependencies(&self) -> &[String] {
        self.product_dependencies.as_deref().unwrap_or_default()
    }

    /// Whether this target is part of the named product.
    pub fn is_member_of(&self, product: &str) -> bool {
        self.product_memberships
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|name| name == product)
    }
}
