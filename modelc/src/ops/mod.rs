//! Core operations.
//!
//! This module contains the business logic for modelc commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod compile;
pub mod info;

pub use check::check;
pub use compile::compile;
pub use info::info;
