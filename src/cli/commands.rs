//! CLI command definitions

use clap::Args;
use std::path::PathBuf;

/// Run the bootstrap steps
#[derive(Debug, Args, Clone, Default)]
pub struct RunCommand {
    /// Project root the step directories are resolved against
    /// (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

/// Show the step plan without executing it
#[derive(Debug, Args, Clone, Default)]
pub struct PlanCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
