//! Protocol-facing description of a compiled model.

use modelc_manifest::{GetStateMode, Metadata};
use serde::Serialize;

/// One YANG module as advertised in gNMI capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelData {
    pub name: String,
    /// Module revision
    pub version: String,
    pub organization: String,
}

/// A read-only subtree and its leaves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReadOnlyPath {
    pub path: String,
    pub sub_path: Vec<ReadOnlySubPath>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReadOnlySubPath {
    pub sub_path: String,
    pub value_type: String,
    pub type_opts: Vec<u64>,
}

/// A configurable leaf with its constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReadWritePath {
    pub path: String,
    pub value_type: String,
    pub units: String,
    pub description: String,
    pub mandatory: bool,
    pub default: String,
    pub range: Vec<String>,
    pub length: Vec<String>,
    pub type_opts: Vec<u64>,
}

/// Derived view of [`Metadata`] shared with the config service.
///
/// The access-control paths are filled in by an annotation step outside the
/// compiler; they are carried through to the templates untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelInfo {
    pub name: String,
    pub version: String,
    pub model_data: Vec<ModelData>,
    /// Root module name; empty if the model lists no modules
    pub module: String,
    pub get_state_mode: GetStateMode,
    pub read_only_path: Vec<ReadOnlyPath>,
    pub read_write_path: Vec<ReadWritePath>,
}

impl ModelInfo {
    /// Project a manifest, keeping module order.
    pub fn from_metadata(metadata: &Metadata) -> Self {
        let model_data = metadata
            .modules
            .iter()
            .map(|module| ModelData {
                name: module.name.clone(),
                version: module.revision.clone(),
                organization: module.organization.clone(),
            })
            .collect();

        Self {
            name: metadata.name.clone(),
            version: metadata.version.clone(),
            model_data,
            module: metadata
                .root_module()
                .map(|m| m.name.clone())
                .unwrap_or_default(),
            get_state_mode: metadata.get_state_mode,
            read_only_path: Vec::new(),
            read_write_path: Vec::new(),
        }
    }

    /// Attach access-control paths produced by an external annotator.
    pub fn with_access_paths(
        mut self,
        read_only: Vec<ReadOnlyPath>,
        read_write: Vec<ReadWritePath>,
    ) -> Self {
        self.read_only_path = read_only;
        self.read_write_path = read_write;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::metadata_with_modules;

    #[test]
    fn test_projects_modules_in_order() {
        let mut metadata = metadata_with_modules("devicesim", &["devicesim", "openconfig-types"]);
        metadata.modules[1].organization = "OpenConfig working group".into();

        let info = ModelInfo::from_metadata(&metadata);

        assert_eq!(info.name, "devicesim");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.module, "devicesim");
        assert_eq!(
            info.model_data,
            vec![
                ModelData {
                    name: "devicesim".into(),
                    version: "2020-01-01".into(),
                    organization: "ONF".into(),
                },
                ModelData {
                    name: "openconfig-types".into(),
                    version: "2020-01-01".into(),
                    organization: "OpenConfig working group".into(),
                },
            ]
        );
        assert!(info.read_only_path.is_empty());
        assert!(info.read_write_path.is_empty());
    }

    #[test]
    fn test_no_modules_means_empty_root() {
        let metadata = metadata_with_modules("empty", &[]);
        assert_eq!(ModelInfo::from_metadata(&metadata).module, "");
    }

    #[test]
    fn test_access_paths_pass_through() {
        let metadata = metadata_with_modules("devicesim", &["devicesim"]);
        let ro = vec![ReadOnlyPath {
            path: "/system/state".into(),
            sub_path: vec![ReadOnlySubPath {
                sub_path: "/uptime".into(),
                value_type: "UINT".into(),
                type_opts: vec![],
            }],
        }];

        let info = ModelInfo::from_metadata(&metadata).with_access_paths(ro.clone(), vec![]);

        assert_eq!(info.read_only_path, ro);
    }
}
