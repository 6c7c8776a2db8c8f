//! External tool invocation.
//!
//! The linter (`pyang`) and the binding generator are opaque processes. The
//! compiler only assembles their arguments, runs them to completion and
//! looks at the exit status. Running is behind [`ToolRunner`] so tests can
//! substitute a recorder for real processes.

mod args;
mod runner;

use std::{fmt, io};

pub use args::{bindings_invocation, lint_invocation, list_schema_files, tree_invocation};
pub use runner::SystemRunner;

use crate::{error::ToolError, logger::Logger};

/// How an external tool finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    code: Option<i32>,
}

impl ToolStatus {
    /// A tool that exited with `code`.
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// A tool that was killed before reporting an exit code.
    pub fn terminated() -> Self {
        Self { code: None }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for ToolStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exited with status {}", code),
            None => write!(f, "was terminated by a signal"),
        }
    }
}

/// A fully assembled command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Variables set on top of the inherited environment.
    pub env: Vec<(String, String)>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external tools to completion.
///
/// Implementations block until the process exits. There is no timeout.
pub trait ToolRunner {
    /// Run the invocation and report how it finished.
    ///
    /// An `Err` means the process could not be started at all.
    fn run(&self, invocation: &Invocation) -> io::Result<ToolStatus>;
}

/// Run an invocation, logging it, and turn anything but a clean exit into
/// a [`ToolError`].
pub fn run_tool(
    runner: &dyn ToolRunner,
    logger: &dyn Logger,
    invocation: &Invocation,
) -> Result<(), ToolError> {
    logger.info(&format!("Executing {}", invocation));

    let status = runner.run(invocation).map_err(|source| ToolError::Spawn {
        program: invocation.program.clone(),
        source,
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(ToolError::Failed {
            program: invocation.program.clone(),
            status,
        })
    }
}
