//! The rendering context shared by every template.

use modelc_manifest::{GetStateMode, Metadata};
use serde::Serialize;

use crate::{
    model_info::{ModelData, ModelInfo, ReadOnlyPath, ReadWritePath},
    plugin_version::PluginVersion,
};

/// Everything a template can refer to.
///
/// Field names serialize in PascalCase, so templates use `{{Name}}`,
/// `{{GoPackage}}`, `{{#each ModelData}}` and so on. Built in one go from
/// its inputs; it has no state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dictionary {
    pub name: String,
    pub version: String,
    pub plugin_version: String,
    pub go_package: String,
    pub model_data: Vec<ModelData>,
    pub module: String,
    pub get_state_mode: GetStateMode,
    pub read_only_path: Vec<ReadOnlyPath>,
    pub read_write_path: Vec<ReadWritePath>,
}

impl Dictionary {
    pub fn new(metadata: &Metadata, model_info: &ModelInfo, plugin_version: &PluginVersion) -> Self {
        Self {
            name: model_info.name.clone(),
            version: model_info.version.clone(),
            plugin_version: plugin_version.as_str().to_string(),
            go_package: metadata.go_package.clone(),
            model_data: model_info.model_data.clone(),
            module: model_info.module.clone(),
            get_state_mode: model_info.get_state_mode,
            read_only_path: model_info.read_only_path.clone(),
            read_write_path: model_info.read_write_path.clone(),
        }
    }
}
