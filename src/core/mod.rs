//! Core data structures of a described package.
//!
//! This module contains the immutable model produced by decoding:
//! - The package itself and its platform restrictions
//! - Dependencies and their version requirements
//! - Products and targets, including resources and plugin capabilities

pub mod dependency;
pub mod package;
pub mod platform;
pub mod product;
pub mod requirement;
pub mod target;

pub use dependency::{Dependency, DependencyKind};
pub use package::Package;
pub use platform::PlatformRestriction;
pub use product::{LibraryType, Product, ProductType};
pub use requirement::{Range, Requirement};
pub use target::{
    CommandIntent, NetworkScope, Permission, PluginCapability, Resource, Rule, Target, TargetKind,
    TargetKindParseError,
};
