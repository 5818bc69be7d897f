//! Bootstrap execution engine

pub mod engine;
pub mod runner;

pub use engine::{
    BootstrapError, BootstrapEvent, DecisionSource, EventHandler, OptionalDecision, Orchestrator,
};
pub use runner::{CommandError, CommandRunner, ProcessRunner};
