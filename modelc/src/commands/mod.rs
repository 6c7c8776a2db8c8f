mod check;
mod compile;
mod completions;
mod info;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use compile::CompileCommand;
use completions::CompletionsCommand;
use eyre::Result;
use info::InfoCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for modelc_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with_diagnostic(*e),
        }
    }
}

/// Manifest failures exit with a source diagnostic; anything else becomes
/// an error report.
pub(crate) trait OrReport<T> {
    fn or_report(self) -> Result<T>;
}

impl<T> OrReport<T> for modelc_compiler::Result<T> {
    fn or_report(self) -> Result<T> {
        match self {
            Ok(v) => Ok(v),
            Err(modelc_compiler::Error::Manifest(e)) => exit_with_diagnostic(*e),
            Err(e) => Err(e.into()),
        }
    }
}

fn exit_with_diagnostic(error: modelc_manifest::Error) -> ! {
    eprintln!("{:?}", miette::Report::new(error));
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "modelc")]
#[command(version)]
#[command(about = "Compile YANG config models into plugin projects")]
pub(crate) struct Cli {
    /// Log each compile stage
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log debug details, including every tool command line
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Compile(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a model directory into a plugin project
    #[command(after_help = "Only warnings and errors are logged by default; pass -v to log each stage as it starts.")]
    Compile(CompileCommand),

    /// Validate metadata.toml without running any tool
    Check(CheckCommand),

    /// Print the template dictionary as JSON
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
