//! bootstrap - workspace bootstrap orchestrator
//!
//! Builds the API package, installs the Rust CLI, and optionally links the
//! companion Node.js CLI, gated by `INSTALL_NODE_CLI` or an interactive
//! prompt.

pub mod cli;
pub mod core;
pub mod execution;

// Re-export commonly used types
pub use crate::core::{
    default_plan, BootstrapConfig, BootstrapPlan, CommandSpec, NodeCliSetting, Step,
    INSTALL_NODE_CLI_ENV,
};
pub use crate::execution::{
    BootstrapError, BootstrapEvent, CommandError, CommandRunner, DecisionSource, OptionalDecision,
    Orchestrator, ProcessRunner,
};
