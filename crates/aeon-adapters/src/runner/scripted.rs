//! Scripted command runner for tests.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use aeon_core::{
    application::{ApplicationError, ports::CommandRunner},
    error::AeonResult,
};

/// One call to [`CommandRunner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Runner with fixed answers that records every invocation.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    available: Vec<String>,
    failing: Vec<String>,
    probes: Arc<Mutex<Vec<String>>>,
    runs: Arc<Mutex<Vec<RecordedCommand>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make probes of `program` succeed.
    pub fn with_available(mut self, program: &str) -> Self {
        self.available.push(program.to_string());
        self
    }

    /// Make runs of `program` exit unsuccessfully.
    pub fn with_failing(mut self, program: &str) -> Self {
        self.failing.push(program.to_string());
        self
    }

    /// Programs probed so far.
    pub fn probes(&self) -> Vec<String> {
        self.probes.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Commands run so far.
    pub fn runs(&self) -> Vec<RecordedCommand> {
        self.runs.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn probe(&self, program: &str, _arg: &str) -> bool {
        self.probes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(program.to_string());
        self.available.iter().any(|p| p == program)
    }

    fn run(&self, program: &str, args: &[String], cwd: &Path) -> AeonResult<()> {
        self.runs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCommand {
                program: program.to_string(),
                args: args.to_vec(),
                cwd: cwd.to_path_buf(),
            });

        if self.failing.iter().any(|p| p == program) {
            return Err(ApplicationError::CommandFailed {
                command: program.to_string(),
                reason: "exit status: 1".into(),
            }
            .into());
        }
        Ok(())
    }
}
