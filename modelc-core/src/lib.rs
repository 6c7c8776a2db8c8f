//! Core utilities and types for the modelc plugin compiler.
//!
//! This crate provides the file primitives and generated-code marker
//! shared by the compiler pipeline and the CLI.

mod file;
mod header;

// File operations
pub use file::{ensure_dir, replace_file, write_file};
// Generated-code marker
pub use header::{GENERATED_HEADER, prepend_header};
