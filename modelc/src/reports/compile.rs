//! Compile command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a successful compile.
#[derive(Debug)]
pub struct CompileReport {
    /// Model directory that was compiled.
    pub model_dir: PathBuf,
    pub name: String,
    pub version: String,
    pub plugin_version: String,
    /// Why the default plugin version was used, if it was.
    pub version_note: Option<String>,
    /// Files written, in order.
    pub artifacts: Vec<PathBuf>,
}

impl Report for CompileReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(note) = &self.version_note {
            out.warning(note);
        }

        out.title(&format!("Compiled {} {}", self.name, self.version));
        let plugin_version = if self.version_note.is_some() {
            format!("{} (default)", self.plugin_version)
        } else {
            self.plugin_version.clone()
        };
        out.key_value("Plugin version", &plugin_version);
        out.key_value("Model directory", &self.model_dir.display().to_string());
        out.newline();

        out.section("Generated files");
        for artifact in &self.artifacts {
            let shown = artifact.strip_prefix(&self.model_dir).unwrap_or(artifact.as_path());
            out.added_item(&shown.display().to_string());
        }
    }
}
