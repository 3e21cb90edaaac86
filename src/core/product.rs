//! Products: the artifacts a package vends to its clients.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::decode::container::{unwrap_single, Decode, Object, VariantDecoder};
use crate::decode::{CodingPath, DecodeError};

/// Linkage of a library product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryType {
    Static,
    Dynamic,
    /// Linkage left to the client's build.
    Automatic,
}

impl LibraryType {
    const TAGS: [&'static str; 3] = ["static", "dynamic", "automatic"];

    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryType::Static => "static",
            LibraryType::Dynamic => "dynamic",
            LibraryType::Automatic => "automatic",
        }
    }
}

impl Decode for LibraryType {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        let tag = String::decode(value, path)?;
        match tag.as_str() {
            "static" => Ok(LibraryType::Static),
            "dynamic" => Ok(LibraryType::Dynamic),
            "automatic" => Ok(LibraryType::Automatic),
            _ => Err(DecodeError::UnrecognizedTag {
                path: path.clone(),
                tag,
                expected: LibraryType::TAGS.to_vec(),
            }),
        }
    }
}

/// The kind of product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    Library(LibraryType),
    Executable,
    Snippet,
    Plugin,
    Test,
    Macro,
}

const PRODUCT_TYPE_VARIANTS: &[(&str, VariantDecoder<ProductType>)] = &[
    ("library", |value, path| unwrap_single(value, path).map(ProductType::Library)),
    ("executable", |_, _| Ok(ProductType::Executable)),
    ("snippet", |_, _| Ok(ProductType::Snippet)),
    ("plugin", |_, _| Ok(ProductType::Plugin)),
    ("test", |_, _| Ok(ProductType::Test)),
    ("macro", |_, _| Ok(ProductType::Macro)),
];

impl Decode for ProductType {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        Object::new(value, path)?.decode_variant(PRODUCT_TYPE_VARIANTS)
    }
}

impl ProductType {
    /// The JSON key that selects this variant.
    pub fn tag(&self) -> &'static str {
        match self {
            ProductType::Library(_) => "library",
            ProductType::Executable => "executable",
            ProductType::Snippet => "snippet",
            ProductType::Plugin => "plugin",
            ProductType::Test => "test",
            ProductType::Macro => "macro",
        }
    }

    pub fn is_library(&self) -> bool {
        matches!(self, ProductType::Library(_))
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductType::Library(kind) => write!(f, "library ({})", kind.as_str()),
            other => f.write_str(other.tag()),
        }
    }
}

impl Serialize for ProductType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            ProductType::Library(kind) => map.serialize_entry("library", &[kind])?,
            other => map.serialize_entry(other.tag(), &())?,
        }
        map.end()
    }
}

/// A product vended by the package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Product {
    pub name: String,

    /// Names of the targets that make up this product.
    pub targets: Vec<String>,

    #[serde(rename = "type")]
    pub product_type: ProductType,
}

impl Decode for Product {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        let object = Object::new(value, path)?;
        Ok(Product {
            name: object.required("name")?,
            targets: object.required("targets")?,
            product_type: object.required("type")?,
        })
    }
}
