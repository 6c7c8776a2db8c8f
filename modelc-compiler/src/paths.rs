//! Layout of a model directory.
//!
//! Every location the compiler reads from or writes to is relative to the
//! model root and named here.

use std::path::{Path, PathBuf};

/// Plugin version marker file.
pub const VERSION_FILE: &str = "VERSION";

/// Directory holding the YANG sources.
pub const YANG_DIR: &str = "yang";

/// Directory receiving the generated bindings.
pub const API_DIR: &str = "api";

/// File name of the generated bindings inside [`API_DIR`].
pub const BINDINGS_FILE: &str = "generated.go";

/// Directory receiving the plugin entry point sources.
pub const PLUGIN_DIR: &str = "plugin";

/// Extension of the schema tree output.
pub const TREE_EXTENSION: &str = "tree";

pub fn yang_dir(model_dir: &Path) -> PathBuf {
    model_dir.join(YANG_DIR)
}

pub fn api_dir(model_dir: &Path) -> PathBuf {
    model_dir.join(API_DIR)
}

pub fn bindings_file(model_dir: &Path) -> PathBuf {
    api_dir(model_dir).join(BINDINGS_FILE)
}

pub fn plugin_dir(model_dir: &Path) -> PathBuf {
    model_dir.join(PLUGIN_DIR)
}

/// `<model>/<name>.tree`
pub fn tree_file(model_dir: &Path, model_name: &str) -> PathBuf {
    model_dir.join(format!("{}.{}", model_name, TREE_EXTENSION))
}
