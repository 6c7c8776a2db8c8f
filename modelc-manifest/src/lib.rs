//! Model manifest (`metadata.toml`) parsing and validation.
//!
//! A model directory carries a small TOML manifest naming the model, its
//! version, the Go package of the plugin to build, and the YANG modules it
//! is made of:
//!
//! ```toml
//! name = "devicesim"
//! version = "1.0.0"
//! go_package = "github.com/onosproject/config-models/modelplugin/devicesim-1.0.0"
//! lint = true
//!
//! [[modules]]
//! name = "devicesim"
//! organization = "ONF"
//! revision = "2019-06-10"
//! file = "devicesim.yang"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod metadata;
mod parse;
mod state_mode;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use metadata::{METADATA_FILE, Metadata, ModuleDescriptor};
pub use parse::parse_metadata;
pub use state_mode::GetStateMode;
