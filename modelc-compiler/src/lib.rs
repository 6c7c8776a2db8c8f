//! Compiler turning a YANG config model directory into a Go plugin project.
//!
//! The entry point is [`Compiler`]. It reads `metadata.toml`, optionally
//! lints the YANG sources, runs the binding generator, writes the schema
//! tree and renders the plugin sources from templates. External tools run
//! through a [`ToolRunner`] and progress is reported through a [`Logger`],
//! both of which can be replaced; see the `testing` module for in-memory
//! versions.

mod config;
mod dictionary;
mod error;
mod header;
mod logger;
mod model_info;
pub mod paths;
pub mod pipeline;
mod plugin_version;
pub mod templates;
pub mod tools;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{CompilerConfig, DEFAULT_GENERATOR, DEFAULT_LINTER, DEFAULT_PACKAGE_NAME};
pub use dictionary::Dictionary;
pub use error::{
    Error, GenerationError, RenderCause, RenderError, Result, ToolError, VersionReadError,
    error_chain,
};
pub use header::insert_header;
pub use logger::{LOG_TARGET, Logger, TracingLogger};
pub use model_info::{ModelData, ModelInfo, ReadOnlyPath, ReadOnlySubPath, ReadWritePath};
pub use pipeline::{CompileOutcome, Compiler, Stage};
pub use plugin_version::{DEFAULT_PLUGIN_VERSION, PluginVersion};
pub use templates::{TemplateKind, TemplateRenderer};
pub use tools::{Invocation, SystemRunner, ToolRunner, ToolStatus};
