//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// One module as listed by the check report.
#[derive(Debug)]
pub struct ModuleSummary {
    pub name: String,
    pub revision: String,
    pub organization: String,
    pub file: String,
}

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the manifest.
    pub manifest_path: PathBuf,
    pub name: String,
    pub version: String,
    pub go_package: String,
    pub lint: bool,
    pub get_state_mode: String,
    pub modules: Vec<ModuleSummary>,
    /// Non-fatal problems found next to the manifest.
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.title(&format!("✓ {} is valid", self.manifest_path.display()));
        out.key_value("Model", &format!("{} {}", self.name, self.version));
        out.key_value("Go package", &self.go_package);
        out.key_value("Lint", if self.lint { "enabled" } else { "disabled" });
        out.key_value("State mode", &self.get_state_mode);
        out.newline();

        let count = self.modules.len();
        out.section(&format!(
            "{} module{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for module in &self.modules {
            let by = if module.organization.is_empty() {
                String::new()
            } else {
                format!(", {}", module.organization)
            };
            out.list_item(&format!(
                "{} @ {} ({}{})",
                module.name, module.revision, module.file, by
            ));
        }
    }
}
