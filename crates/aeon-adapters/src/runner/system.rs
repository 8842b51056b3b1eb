//! Runs package-manager commands as real child processes.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use aeon_core::{
    application::{ApplicationError, ports::CommandRunner},
    error::AeonResult,
};

/// Production runner backed by `std::process::Command`.
///
/// Child output is discarded so the spinner owns the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

/// Package managers ship as `.cmd` shims on Windows and need the shell.
fn command(program: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", program]);
        cmd
    } else {
        Command::new(program)
    }
}

impl CommandRunner for SystemCommandRunner {
    fn probe(&self, program: &str, arg: &str) -> bool {
        let status = command(program)
            .arg(arg)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => status.success(),
            Err(e) => {
                debug!(program, error = %e, "Probe could not start");
                false
            }
        }
    }

    #[instrument(skip(self), fields(cwd = %cwd.display()))]
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> AeonResult<()> {
        let rendered = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");

        let status = command(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ApplicationError::CommandFailed {
                command: rendered.clone(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ApplicationError::CommandFailed {
                command: rendered,
                reason: status.to_string(),
            }
            .into())
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn probe_reports_exit_status() {
        let runner = SystemCommandRunner::new();
        assert!(runner.probe("true", "--version"));
        assert!(!runner.probe("false", "--version"));
    }

    #[test]
    fn missing_program_is_a_failed_probe() {
        assert!(!SystemCommandRunner::new().probe("aeon-definitely-not-installed", "--version"));
    }

    #[test]
    fn run_fails_on_nonzero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemCommandRunner::new();

        assert!(runner.run("true", &[], dir.path()).is_ok());
        let err = runner.run("false", &["install".into()], dir.path()).unwrap_err();
        assert!(err.to_string().contains("false install"));
    }
}
