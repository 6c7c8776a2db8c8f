//! Compile operation - full model compilation.

use std::path::Path;

use modelc_compiler::{Compiler, Result, error_chain};

use crate::reports::CompileReport;

/// Execute the compile operation.
///
/// Runs every stage against `model_dir` and summarizes what was written.
pub fn compile(compiler: &Compiler, model_dir: &Path) -> Result<CompileReport> {
    let outcome = compiler.compile(model_dir)?;

    Ok(CompileReport {
        model_dir: model_dir.to_path_buf(),
        name: outcome.dictionary.name,
        version: outcome.dictionary.version,
        plugin_version: outcome.dictionary.plugin_version,
        version_note: outcome.version_warning.as_ref().map(|w| error_chain(w)),
        artifacts: outcome.artifacts,
    })
}
