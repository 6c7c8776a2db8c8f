use std::{io, process::Command};

use super::{Invocation, ToolRunner, ToolStatus};

/// Spawns real processes.
///
/// The child inherits this process's environment plus the invocation's
/// extra variables, and writes straight to our stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ToolStatus> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .envs(invocation.env.iter().map(|(k, v)| (k, v)))
            .status()?;
        Ok(status.into())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_reports_exit_code() {
        let ok = SystemRunner
            .run(&Invocation::new("sh").args(["-c", "exit 0"]))
            .unwrap();
        assert!(ok.success());

        let failed = SystemRunner
            .run(&Invocation::new("sh").args(["-c", "exit 4"]))
            .unwrap();
        assert_eq!(failed.code(), Some(4));
    }

    #[test]
    fn test_passes_extra_env() {
        let status = SystemRunner
            .run(
                &Invocation::new("sh")
                    .args(["-c", "test \"$MODELC_PROBE\" = yes"])
                    .envs([("MODELC_PROBE", "yes")]),
            )
            .unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let result = SystemRunner.run(&Invocation::new("modelc-no-such-tool-xyz"));
        assert!(result.is_err());
    }
}
