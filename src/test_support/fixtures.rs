//! Test fixtures for common test scenarios.
//!
//! Raw `describe --type json` documents in the tool's snake_case format,
//! plus a builder for small synthetic descriptions.

use serde_json::{json, Value};

/// The description of a single-library package with a test target.
pub const SELF_DESCRIPTION: &str = r#"{
  "dependencies" : [

  ],
  "manifest_display_name" : "SwiftPackageDescription",
  "name" : "SwiftPackageDescription",
  "path" : "/Users/dev/Projects/SwiftPackageDescription",
  "platforms" : [

  ],
  "products" : [
    {
      "name" : "SwiftPackageDescription",
      "targets" : [
        "SwiftPackageDescription"
      ],
      "type" : {
        "library" : [
          "automatic"
        ]
      }
    }
  ],
  "targets" : [
    {
      "c99name" : "SwiftPackageDescriptionTests",
      "module_type" : "SwiftTarget",
      "name" : "SwiftPackageDescriptionTests",
      "path" : "Tests/SwiftPackageDescriptionTests",
      "sources" : [
        "SwiftPackageDescriptionTests.swift"
      ],
      "target_dependencies" : [
        "SwiftPackageDescription"
      ],
      "type" : "test"
    },
    {
      "c99name" : "SwiftPackageDescription",
      "module_type" : "SwiftTarget",
      "name" : "SwiftPackageDescription",
      "path" : "Sources/SwiftPackageDescription",
      "product_memberships" : [
        "SwiftPackageDescription"
      ],
      "sources" : [
        "DescribedPackage.swift"
      ],
      "type" : "library"
    }
  ],
  "tools_version" : "5.9"
}"#;

/// A description exercising every dependency kind, product type family,
/// resources, and a command plugin with permissions.
pub const FULL_DESCRIPTION: &str = r#"{
  "c_language_standard" : "gnu11",
  "cxx_language_standard" : "c++17",
  "default_localization" : "en",
  "dependencies" : [
    {
      "identity" : "swift-argument-parser",
      "requirement" : {
        "range" : [
          {
            "lower_bound" : "1.2.0",
            "upper_bound" : "2.0.0"
          }
        ]
      },
      "type" : "sourceControl",
      "url" : "https://github.com/apple/swift-argument-parser.git"
    },
    {
      "identity" : "utilities",
      "path" : "/Users/dev/Projects/utilities",
      "type" : "fileSystem"
    },
    {
      "identity" : "mona.linkedlist",
      "requirement" : {
        "exact" : [
          "1.0.0"
        ]
      },
      "type" : "registry"
    }
  ],
  "manifest_display_name" : "Kit",
  "name" : "kit",
  "path" : "/Users/dev/Projects/kit",
  "platforms" : [
    {
      "name" : "macos",
      "version" : "13.0"
    },
    {
      "name" : "ios",
      "options" : [
        "simulator"
      ],
      "version" : "16.0"
    }
  ],
  "products" : [
    {
      "name" : "Kit",
      "targets" : [
        "Kit"
      ],
      "type" : {
        "library" : [
          "automatic"
        ]
      }
    },
    {
      "name" : "kit-tool",
      "targets" : [
        "KitTool"
      ],
      "type" : {
        "executable" : null
      }
    },
    {
      "name" : "FormatterPlugin",
      "targets" : [
        "Formatter"
      ],
      "type" : {
        "plugin" : null
      }
    }
  ],
  "swift_languages_versions" : [
    "5"
  ],
  "targets" : [
    {
      "c99name" : "Kit",
      "module_type" : "SwiftTarget",
      "name" : "Kit",
      "path" : "Sources/Kit",
      "product_memberships" : [
        "Kit",
        "kit-tool"
      ],
      "resources" : [
        {
          "path" : "/Users/dev/Projects/kit/Sources/Kit/Resources/en.lproj/Localizable.strings",
          "rule" : {
            "process" : {
              "localization" : "en"
            }
          }
        },
        {
          "path" : "/Users/dev/Projects/kit/Sources/Kit/Resources/schema.json",
          "rule" : {
            "copy" : {

            }
          }
        },
        {
          "path" : "/Users/dev/Projects/kit/Sources/Kit/Resources/seed.bin",
          "rule" : {
            "embed_in_code" : {

            }
          }
        }
      ],
      "sources" : [
        "Kit.swift",
        "Model/Node.swift",
        "Model/Edge.swift"
      ],
      "type" : "library"
    },
    {
      "c99name" : "KitTool",
      "module_type" : "SwiftTarget",
      "name" : "KitTool",
      "path" : "Sources/KitTool",
      "product_dependencies" : [
        "ArgumentParser"
      ],
      "product_memberships" : [
        "kit-tool"
      ],
      "sources" : [
        "main.swift"
      ],
      "target_dependencies" : [
        "Kit"
      ],
      "type" : "executable"
    },
    {
      "c99name" : "KitTests",
      "module_type" : "SwiftTarget",
      "name" : "KitTests",
      "path" : "Tests/KitTests",
      "resources" : [

      ],
      "sources" : ["KitTests.swift"],
      "target_dependencies" : [
        "Kit"
      ],
      "type" : "test"
    },
    {
      "c99name" : "Formatter",
      "module_type" : "PluginTarget",
      "name" : "Formatter",
      "path" : "Plugins/Formatter",
      "plugin_capability" : {
        "intent" : {
          "description" : "Formats the package sources",
          "type" : "custom",
          "verb" : "format-source"
        },
        "permissions" : [
          {
            "network_scope" : {
              "none" : {

              }
            },
            "reason" : "Rewrites source files in place",
            "type" : "writeToPackageDirectory"
          },
          {
            "network_scope" : {
              "local" : {
                "ports" : [
                  8080
                ]
              }
            },
            "reason" : "Talks to the formatting daemon",
            "type" : "allowNetworkConnections"
          }
        ],
        "type" : "command"
      },
      "product_memberships" : [
        "FormatterPlugin"
      ],
      "sources" : [
        "plugin.swift"
      ],
      "type" : "plugin"
    }
  ],
  "tools_version" : "5.9"
}"#;

/// Builder for small synthetic package descriptions.
#[derive(Debug, Clone)]
pub struct DescriptionFixture {
    /// Package name.
    pub name: String,
    /// Raw dependency objects.
    pub dependencies: Vec<Value>,
    /// Raw product objects.
    pub products: Vec<Value>,
    /// Raw target objects.
    pub targets: Vec<Value>,
}

impl DescriptionFixture {
    /// Create a description with no dependencies, products, or targets.
    pub fn new(name: impl Into<String>) -> Self {
        DescriptionFixture {
            name: name.into(),
            dependencies: Vec::new(),
            products: Vec::new(),
            targets: Vec::new(),
        }
    }

    /// Add a library target and a matching automatic library product.
    pub fn library(mut self, name: &str) -> Self {
        self.products.push(json!({
            "name": name,
            "targets": [name],
            "type": { "library": ["automatic"] }
        }));
        self.target(name, "library", &[&format!("{name}.swift")])
    }

    /// Add a target with the given type tag and sources.
    pub fn target(mut self, name: &str, target_type: &str, sources: &[&str]) -> Self {
        self.targets.push(json!({
            "name": name,
            "type": target_type,
            "path": format!("Sources/{name}"),
            "sources": sources
        }));
        self
    }

    /// Add a raw dependency object.
    pub fn dependency(mut self, dependency: Value) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Build the snake_case JSON document.
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "manifest_display_name": self.name,
            "path": format!("/work/{}", self.name),
            "tools_version": "5.9",
            "dependencies": self.dependencies,
            "platforms": [],
            "products": self.products,
            "targets": self.targets
        })
    }

    /// Build the document as JSON text.
    pub fn to_text(&self) -> String {
        self.to_json().to_string()
    }
}
