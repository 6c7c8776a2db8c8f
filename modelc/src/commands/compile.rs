use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modelc_compiler::{
    Compiler, CompilerConfig, DEFAULT_GENERATOR, DEFAULT_LINTER, DEFAULT_PACKAGE_NAME,
};

use super::OrReport;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CompileCommand {
    /// Model directory containing metadata.toml
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Program used for linting and the schema tree
    #[arg(long, env = "MODELC_LINTER", default_value = DEFAULT_LINTER)]
    pub linter: String,

    /// Program used to generate the Go bindings
    #[arg(long, env = "MODELC_GENERATOR", default_value = DEFAULT_GENERATOR)]
    pub generator: String,

    /// Directory of .tpl files replacing the built-in templates
    #[arg(long)]
    pub template_dir: Option<PathBuf>,

    /// Go package name for the generated bindings
    #[arg(long, default_value = DEFAULT_PACKAGE_NAME)]
    pub package_name: String,

    /// Extra environment variable for tool runs
    #[arg(long = "env", value_name = "KEY=VALUE", value_parser = parse_env_var)]
    pub env: Vec<(String, String)>,
}

impl CompileCommand {
    pub fn run(&self) -> Result<()> {
        let compiler = Compiler::new(self.config());
        tracing::debug!(config = ?compiler.config(), "compiler configured");

        let report = ops::compile(&compiler, &self.path).or_report()?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    fn config(&self) -> CompilerConfig {
        let mut config = CompilerConfig::new()
            .linter(&self.linter)
            .generator(&self.generator)
            .package_name(&self.package_name);
        if let Some(dir) = &self.template_dir {
            config = config.template_dir(dir);
        }
        for (key, value) in &self.env {
            config = config.env(key, value);
        }
        config
    }
}

fn parse_env_var(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}
