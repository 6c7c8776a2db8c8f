use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modelc_compiler::{Compiler, CompilerConfig};

use super::OrReport;
use crate::ops;

#[derive(Args)]
pub struct InfoCommand {
    /// Model directory containing metadata.toml
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let compiler = Compiler::new(CompilerConfig::default());

        let dictionary = ops::info(&compiler, &self.path).or_report()?;
        println!("{}", serde_json::to_string_pretty(&dictionary)?);

        Ok(())
    }
}
