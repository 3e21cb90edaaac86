//! Package - the decoded package description.
//!
//! The root of the model. Products and targets refer to each other by name
//! only; the lookups here return `None` for names that do not resolve.

use serde::Serialize;
use serde_json::Value;

use crate::core::dependency::Dependency;
use crate::core::platform::PlatformRestriction;
use crate::core::product::Product;
use crate::core::target::{Target, TargetKind};
use crate::decode::container::{Decode, Object};
use crate::decode::{CodingPath, DecodeError};

/// A fully decoded package description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Package {
    pub name: String,

    pub manifest_display_name: String,

    /// Absolute path of the package root.
    pub path: String,

    /// Tools version the manifest declares, e.g. `5.9`.
    pub tools_version: String,

    pub dependencies: Vec<Dependency>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_localization: Option<String>,

    pub platforms: Vec<PlatformRestriction>,

    pub products: Vec<Product>,

    pub targets: Vec<Target>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub c_language_standard: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cxx_language_standard: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift_languages_versions: Option<Vec<String>>,
}

impl Decode for Package {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        let object = Object::new(value, path)?;
        let name: String = object.required("name")?;
        tracing::debug!("decoding package description for `{}`", name);

        let package = Package {
            name,
            manifest_display_name: object.required("manifestDisplayName")?,
            path: object.required("path")?,
            tools_version: object.required("toolsVersion")?,
            dependencies: object.required("dependencies")?,
            default_localization: object.optional("defaultLocalization")?,
            platforms: object.required("platforms")?,
            products: object.required("products")?,
            targets: object.required("targets")?,
            c_language_standard: object.optional("cLanguageStandard")?,
            cxx_language_standard: object.optional("cxxLanguageStandard")?,
            swift_languages_versions: object.optional("swiftLanguagesVersions")?,
        };

        tracing::debug!(
            "decoded `{}`: {} dependencies, {} products, {} targets",
            package.name,
            package.dependencies.len(),
            package.products.len(),
            package.targets.len()
        );

        Ok(package)
    }
}

impl Package {
    /// Get a target by name.
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }

    /// Get a product by name.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Get a dependency by package identity.
    pub fn dependency(&self, identity: &str) -> Option<&Dependency> {
        self.dependencies.iter().find(|d| d.identity() == identity)
    }

    /// Products of library type, in description order.
    pub fn library_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.product_type.is_library())
    }

    /// Targets of the given kind, in description order.
    pub fn targets_of_kind(&self, kind: TargetKind) -> impl Iterator<Item = &Target> {
        self.targets.iter().filter(move |t| t.kind() == Some(kind))
    }

    /// Targets that make up the named product, resolved by name.
    ///
    /// Names that do not match a target are skipped.
    pub fn product_targets<'a>(&'a self, product: &'a Product) -> impl Iterator<Item = &'a Target> {
        product
            .targets
            .iter()
            .filter_map(move |name| self.target(name))
    }
}
