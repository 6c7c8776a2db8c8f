//! Check operation - manifest validation.

use std::path::Path;

use modelc_compiler::paths;
use modelc_manifest::{METADATA_FILE, Metadata, Result};

use crate::reports::{CheckReport, ModuleSummary};

/// Execute the check operation.
///
/// Loads and validates the manifest, then looks for each module's YANG
/// source. A missing source is reported as a warning; the binding
/// generator and linter will fail on it later.
pub fn check(model_dir: &Path) -> Result<CheckReport> {
    let metadata = Metadata::load(model_dir)?;
    let yang_dir = paths::yang_dir(model_dir);

    let mut warnings = Vec::new();
    let modules = metadata
        .modules
        .iter()
        .map(|module| {
            let source = yang_dir.join(&module.yang_file);
            if !source.is_file() {
                warnings.push(format!(
                    "module '{}': source '{}' not found",
                    module.name,
                    source.display()
                ));
            }
            ModuleSummary {
                name: module.name.clone(),
                revision: module.revision.clone(),
                organization: module.organization.clone(),
                file: module.yang_file.clone(),
            }
        })
        .collect();

    Ok(CheckReport {
        manifest_path: model_dir.join(METADATA_FILE),
        name: metadata.name,
        version: metadata.version.clone(),
        go_package: metadata.go_package,
        lint: metadata.lint_model,
        get_state_mode: metadata.get_state_mode.to_string(),
        modules,
        warnings,
    })
}
