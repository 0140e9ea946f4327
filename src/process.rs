//! # Subprocess Invocation
//!
//! Every external command in the pipeline (git, npm, gulp) goes through this
//! module. Commands are described as an argument vector plus an optional
//! working directory, never as a shell string, so repository locators are
//! passed to the child verbatim without shell interpretation.
//!
//! Invocations are built as plain data first and executed second. The
//! builders in [`crate::git`] and [`crate::build`] return [`Invocation`]
//! values that tests can inspect without running anything; [`Invocation::run`]
//! spawns the child with inherited stdio and blocks until it exits, which is
//! what lets `git commit -v` open the operator's editor and lets build output
//! interleave naturally with the tool's own.

use std::path::PathBuf;
use std::process::Command;

use crate::error::{Error, Result};

/// A planned external command: program, argument vector, and the directory
/// to run it in. `cwd: None` means "inherit the process cwd".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    /// Plan a command with no explicit working directory.
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: None,
        }
    }

    /// Plan a command that runs inside `cwd`.
    pub fn in_dir(program: &str, args: &[&str], cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
            ..Self::new(program, args)
        }
    }

    /// Render the command line for logs and error messages.
    pub fn render(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run the command with inherited stdio, blocking until it exits.
    ///
    /// A spawn failure or a non-zero exit status is returned as a typed
    /// error carrying the rendered command line. Output is not captured;
    /// the child writes straight to the operator's terminal.
    pub fn run(&self) -> Result<()> {
        log::debug!("running: {}", self.render());

        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }

        let status = command.status().map_err(|e| Error::CommandSpawn {
            command: self.render(),
            source: e,
        })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                command: self.render(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

/// Run a sequence of invocations in order, stopping at the first failure.
pub fn run_all(invocations: &[Invocation]) -> Result<()> {
    for invocation in invocations {
        invocation.run()?;
    }
    Ok(())
}
