//! Bootstrap orchestrator - runs the step plan front to back

use crate::{
    core::{BootstrapConfig, BootstrapPlan, NodeCliSetting, Step},
    execution::{CommandError, CommandRunner},
};
use async_trait::async_trait;
use std::io;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Whether the optional step should run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalDecision {
    Install,
    Skip,
}

/// Source of the optional-step decision when the environment does not decide.
///
/// The orchestrator only consults this when the install setting is `Prompt`,
/// so an environment override never blocks on input.
#[async_trait]
pub trait DecisionSource: Send {
    async fn decide(&mut self) -> io::Result<OptionalDecision>;
}

/// Error surfaced by a bootstrap run
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A step command failed; nothing after it was run
    #[error("step '{step}' failed: {source}")]
    StepFailed {
        step: String,
        exit_code: i32,
        #[source]
        source: CommandError,
    },

    /// Reading the interactive decision failed
    #[error("failed to read the install decision: {0}")]
    Decision(#[from] io::Error),
}

impl BootstrapError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            BootstrapError::StepFailed { exit_code, .. } => *exit_code,
            BootstrapError::Decision(_) => 1,
        }
    }
}

/// Events emitted while the plan runs
#[derive(Debug, Clone)]
pub enum BootstrapEvent {
    StepStarted { step_id: String, name: String },
    CommandStarted { step_id: String, command: String },
    StepCompleted { step_id: String },
    StepFailed { step_id: String, exit_code: i32 },
    OptionalSkipped,
    CompletionNote { note: String },
    BootstrapCompleted,
}

/// Type for event handlers
pub type EventHandler = Arc<dyn Fn(BootstrapEvent) + Send + Sync>;

/// Runs the bootstrap plan strictly in order, stopping at the first failure
pub struct Orchestrator<R> {
    runner: R,
    event_handlers: Arc<Mutex<Vec<EventHandler>>>,
}

impl<R: CommandRunner> Orchestrator<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            event_handlers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add an event handler
    pub async fn add_event_handler<F>(&self, handler: F)
    where
        F: Fn(BootstrapEvent) + Send + Sync + 'static,
    {
        self.event_handlers.lock().await.push(Arc::new(handler));
    }

    /// Emit an event to all handlers
    async fn emit(&self, event: BootstrapEvent) {
        let handlers = self.event_handlers.lock().await;
        for handler in handlers.iter() {
            handler(event.clone());
        }
    }

    /// Execute the whole plan: mandatory steps, then the gated optional step.
    ///
    /// A non-zero exit anywhere aborts the run immediately and surfaces the
    /// failing step and exit code. There are no retries.
    pub async fn run<D: DecisionSource>(
        &self,
        plan: &BootstrapPlan,
        config: &BootstrapConfig,
        decisions: &mut D,
    ) -> Result<(), BootstrapError> {
        info!(
            "Starting bootstrap run ({} mandatory steps)",
            plan.mandatory.len()
        );

        for step in &plan.mandatory {
            self.run_step(step, config).await?;
        }

        let decision = match config.node_cli {
            NodeCliSetting::Install => {
                info!("Node.js CLI install forced by the environment");
                OptionalDecision::Install
            }
            NodeCliSetting::Skip => OptionalDecision::Skip,
            NodeCliSetting::Prompt => decisions.decide().await?,
        };

        match decision {
            OptionalDecision::Install => {
                self.run_step(&plan.optional, config).await?;
                self.emit(BootstrapEvent::CompletionNote {
                    note: plan.completion_note.clone(),
                })
                .await;
            }
            OptionalDecision::Skip => {
                info!("Skipping the Node.js CLI install");
                self.emit(BootstrapEvent::OptionalSkipped).await;
            }
        }

        self.emit(BootstrapEvent::BootstrapCompleted).await;
        Ok(())
    }

    async fn run_step(&self, step: &Step, config: &BootstrapConfig) -> Result<(), BootstrapError> {
        info!("Running step: {}", step.id);
        self.emit(BootstrapEvent::StepStarted {
            step_id: step.id.clone(),
            name: step.name.clone(),
        })
        .await;

        let dir = step.resolved_dir(&config.root);

        for command in &step.commands {
            self.emit(BootstrapEvent::CommandStarted {
                step_id: step.id.clone(),
                command: command.to_string(),
            })
            .await;

            if let Err(e) = self.runner.run(command, &dir).await {
                let exit_code = e.exit_code();
                error!("Step {} failed: {}", step.id, e);
                self.emit(BootstrapEvent::StepFailed {
                    step_id: step.id.clone(),
                    exit_code,
                })
                .await;
                return Err(BootstrapError::StepFailed {
                    step: step.id.clone(),
                    exit_code,
                    source: e,
                });
            }
        }

        self.emit(BootstrapEvent::StepCompleted {
            step_id: step.id.clone(),
        })
        .await;
        Ok(())
    }
}
