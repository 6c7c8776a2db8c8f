//! Info operation - dictionary preview.

use std::path::Path;

use modelc_compiler::{Compiler, Dictionary, Result};

/// Execute the info operation.
///
/// Builds the dictionary a compile of `model_dir` would render with.
pub fn info(compiler: &Compiler, model_dir: &Path) -> Result<Dictionary> {
    compiler.describe(model_dir)
}
