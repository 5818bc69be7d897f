//! External command execution

use crate::core::CommandSpec;
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};

/// Error from running a single external command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with code {exit_code}")]
    NonZero { command: String, exit_code: i32 },
}

impl CommandError {
    /// Process exit code to propagate for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Spawn { .. } => 1,
            CommandError::NonZero { exit_code, .. } if *exit_code > 0 => *exit_code,
            // Killed by signal (no exit code)
            CommandError::NonZero { .. } => 1,
        }
    }
}

/// Trait for command execution - allows tests to substitute a recording mock
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run one command inside `dir`, passing stdout/stderr through
    async fn run(&self, spec: &CommandSpec, dir: &Path) -> Result<(), CommandError>;
}

/// Runner that spawns real processes
///
/// The working directory is threaded through `current_dir` rather than by
/// mutating the process-wide cwd, so the orchestrator's own directory is
/// never touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, spec: &CommandSpec, dir: &Path) -> Result<(), CommandError> {
        debug!("Running `{}` in {}", spec, dir.display());

        // Stdio is inherited: the child's own output is the diagnostic
        let status = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(dir)
            .status()
            .await
            .map_err(|e| CommandError::Spawn {
                command: spec.to_string(),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            let exit_code = status.code().unwrap_or(-1);
            warn!("`{}` exited with code {}", spec, exit_code);
            Err(CommandError::NonZero {
                command: spec.to_string(),
                exit_code,
            })
        }
    }
}
