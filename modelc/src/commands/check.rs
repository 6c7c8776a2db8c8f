use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Model directory containing metadata.toml
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::check(&self.path).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
