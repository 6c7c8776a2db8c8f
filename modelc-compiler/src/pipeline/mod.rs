//! Compilation pipeline.
//!
//! [`Compiler`] drives a model directory through the [`Stage`]s:
//!
//! - load and validate the manifest
//! - read the plugin version (best effort)
//! - lint the YANG sources, when the model asks for it
//! - build the template [`Dictionary`](crate::Dictionary)
//! - generate Go bindings and mark them as generated
//! - write the schema tree
//! - render the plugin project files
//!
//! State flows between stages through a [`CompilationContext`].

mod context;
mod runner;
mod stage;

pub use context::{CompilationContext, CompileOutcome};
pub use runner::Compiler;
pub use stage::Stage;
