//! Shared test doubles for the bootstrap scenarios

#![allow(dead_code)]

use async_trait::async_trait;
use bootstrap::core::{BootstrapConfig, CommandSpec, NodeCliSetting};
use bootstrap::execution::{CommandError, CommandRunner, DecisionSource, OptionalDecision};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A recorded command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub dir: PathBuf,
}

/// Runner that records invocations and optionally fails on one command
pub struct RecordingRunner {
    invocations: Arc<Mutex<Vec<Invocation>>>,
    fail_on: Option<(String, i32)>,
}

impl RecordingRunner {
    pub fn succeeding() -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            fail_on: None,
        }
    }

    pub fn failing_on(command: &str, exit_code: i32) -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            fail_on: Some((command.to_string(), exit_code)),
        }
    }

    /// Handle to the invocation log, cloneable before the runner moves
    /// into the orchestrator
    pub fn log(&self) -> Arc<Mutex<Vec<Invocation>>> {
        self.invocations.clone()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, spec: &CommandSpec, dir: &Path) -> Result<(), CommandError> {
        let rendered = spec.to_string();
        self.invocations.lock().unwrap().push(Invocation {
            command: rendered.clone(),
            dir: dir.to_path_buf(),
        });

        if let Some((needle, exit_code)) = &self.fail_on {
            if rendered == *needle {
                return Err(CommandError::NonZero {
                    command: rendered,
                    exit_code: *exit_code,
                });
            }
        }
        Ok(())
    }
}

/// Decision source that panics if it is ever consulted
pub struct UnreachableDecisions;

#[async_trait]
impl DecisionSource for UnreachableDecisions {
    async fn decide(&mut self) -> std::io::Result<OptionalDecision> {
        panic!("decision source consulted despite environment override");
    }
}

/// Build a config without touching the real process environment
pub fn config_with(setting: NodeCliSetting) -> BootstrapConfig {
    BootstrapConfig {
        node_cli: setting,
        root: PathBuf::from("/work/project"),
    }
}

/// Rendered commands from an invocation log, in order
pub fn commands(log: &Arc<Mutex<Vec<Invocation>>>) -> Vec<String> {
    log.lock().unwrap().iter().map(|i| i.command.clone()).collect()
}
