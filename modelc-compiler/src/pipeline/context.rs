//! State carried between compilation stages.

use std::path::{Path, PathBuf};

use modelc_manifest::Metadata;

use crate::{dictionary::Dictionary, error::VersionReadError, plugin_version::PluginVersion};

/// Everything one compile has produced so far.
///
/// Created once the manifest has loaded; later stages append the files
/// they write.
#[derive(Debug)]
pub struct CompilationContext {
    /// Root of the model being compiled.
    pub model_dir: PathBuf,
    pub metadata: Metadata,
    pub plugin_version: PluginVersion,
    /// Files written, in the order they were written.
    pub artifacts: Vec<PathBuf>,
}

impl CompilationContext {
    pub fn new(model_dir: &Path, metadata: Metadata, plugin_version: PluginVersion) -> Self {
        Self {
            model_dir: model_dir.to_path_buf(),
            metadata,
            plugin_version,
            artifacts: Vec::new(),
        }
    }

    pub fn record(&mut self, artifact: PathBuf) {
        self.artifacts.push(artifact);
    }

    /// Finish the compile.
    pub fn into_outcome(self, dictionary: Dictionary) -> CompileOutcome {
        let (_, version_warning) = self.plugin_version.into_parts();
        CompileOutcome {
            dictionary,
            artifacts: self.artifacts,
            version_warning,
        }
    }
}

/// Result of a successful compile.
#[derive(Debug)]
pub struct CompileOutcome {
    /// The context every template was rendered with.
    pub dictionary: Dictionary,
    /// Every file written, in order.
    pub artifacts: Vec<PathBuf>,
    /// Why the default plugin version was used, if it was.
    pub version_warning: Option<VersionReadError>,
}
