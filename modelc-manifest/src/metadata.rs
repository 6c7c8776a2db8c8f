//! Manifest types for `metadata.toml`.

use serde::{Deserialize, Serialize};

use crate::GetStateMode;

/// Fixed name of the manifest inside a model directory.
pub const METADATA_FILE: &str = "metadata.toml";

/// Root manifest of a config model
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Metadata {
    /// Model name, also used for the `<name>.tree` output
    pub name: String,

    /// Model version, kept exactly as written
    pub version: String,

    /// Go module path of the generated plugin
    #[serde(default)]
    pub go_package: String,

    /// Lint YANG files before generating bindings
    #[serde(default, rename = "lint")]
    pub lint_model: bool,

    /// How the plugin serves operational state
    #[serde(default)]
    pub get_state_mode: GetStateMode,

    /// Schema modules, in the order they are handed to the tools
    #[serde(default)]
    pub modules: Vec<ModuleDescriptor>,
}

/// One YANG module of a model
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleDescriptor {
    pub name: String,

    #[serde(default)]
    pub organization: String,

    /// Revision date, `YYYY-MM-DD`
    pub revision: String,

    /// Source file name under the model's `yang/` directory
    #[serde(rename = "file")]
    pub yang_file: String,
}

impl Metadata {
    /// Look up a module by name.
    pub fn module(&self, name: &str) -> Option<&ModuleDescriptor> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// The root module: the first one listed.
    pub fn root_module(&self) -> Option<&ModuleDescriptor> {
        self.modules.first()
    }
}
