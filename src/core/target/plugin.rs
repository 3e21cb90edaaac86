//! Plugin capability metadata for plugin targets.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::decode::container::{Decode, Object, VariantDecoder};
use crate::decode::{CodingPath, DecodeError};

/// What a plugin does: its capability kind plus, for command plugins, the
/// intent and the permissions it asks for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PluginCapability {
    /// Capability kind, e.g. `buildTool` or `command`.
    #[serde(rename = "type")]
    pub capability_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<CommandIntent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Permission>>,
}

impl Decode for PluginCapability {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        let object = Object::new(value, path)?;
        Ok(PluginCapability {
            capability_type: object.required("type")?,
            intent: object.optional("intent")?,
            permissions: object.optional("permissions")?,
        })
    }
}

/// The intent of a command plugin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CommandIntent {
    #[serde(rename = "type")]
    pub intent_type: String,

    /// The custom verb that invokes the plugin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Decode for CommandIntent {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        let object = Object::new(value, path)?;
        Ok(CommandIntent {
            intent_type: object.required("type")?,
            verb: object.optional("verb")?,
            description: object.optional("description")?,
        })
    }
}

/// A permission requested by a command plugin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Permission {
    #[serde(rename = "type")]
    pub permission_type: String,

    /// Why the plugin needs it, shown to the user.
    pub reason: String,

    pub network_scope: NetworkScope,
}

impl Decode for Permission {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        let object = Object::new(value, path)?;
        Ok(Permission {
            permission_type: object.required("type")?,
            reason: object.required("reason")?,
            network_scope: object.required("networkScope")?,
        })
    }
}

/// Network access granted to a plugin.
///
/// Port numbers are kept as written; values outside the TCP port range are
/// not rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NetworkScope {
    None,
    Local { ports: Vec<i64> },
    All { ports: Vec<i64> },
    Docker,
    UnixDomainSocket,
}

fn decode_ports(value: &Value, path: &CodingPath) -> Result<Vec<i64>, DecodeError> {
    Object::new(value, path)?.required("ports")
}

const NETWORK_SCOPE_VARIANTS: &[(&str, VariantDecoder<NetworkScope>)] = &[
    ("none", |_, _| Ok(NetworkScope::None)),
    ("local", |value, path| {
        decode_ports(value, path).map(|ports| NetworkScope::Local { ports })
    }),
    ("all", |value, path| {
        decode_ports(value, path).map(|ports| NetworkScope::All { ports })
    }),
    ("docker", |_, _| Ok(NetworkScope::Docker)),
    ("unixDomainSocket", |_, _| Ok(NetworkScope::UnixDomainSocket)),
];

impl Decode for NetworkScope {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        Object::new(value, path)?.decode_variant(NETWORK_SCOPE_VARIANTS)
    }
}

impl NetworkScope {
    /// Ports the scope is limited to; empty for scopes without ports.
    pub fn ports(&self) -> &[i64] {
        match self {
            NetworkScope::Local { ports } | NetworkScope::All { ports } => ports,
            _ => &[],
        }
    }
}

#[derive(Serialize)]
struct PortsPayload<'a> {
    ports: &'a [i64],
}

impl Serialize for NetworkScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            NetworkScope::None => map.serialize_entry("none", &Map::new())?,
            NetworkScope::Local { ports } => map.serialize_entry("local", &PortsPayload { ports })?,
            NetworkScope::All { ports } => map.serialize_entry("all", &PortsPayload { ports })?,
            NetworkScope::Docker => map.serialize_entry("docker", &Map::new())?,
            NetworkScope::UnixDomainSocket => {
                map.serialize_entry("unix_domain_socket", &Map::new())?
            }
        }
        map.end()
    }
}
