//! Command-line interface

pub mod commands;
pub mod output;
pub mod prompt;

use clap::{Parser, Subcommand};
use commands::{PlanCommand, RunCommand};

/// Workspace bootstrap tool
#[derive(Debug, Parser, Clone)]
#[command(name = "bootstrap")]
#[command(version = "0.1.0")]
#[command(about = "Builds the API package and installs the dev CLIs", long_about = None)]
pub struct Cli {
    /// Defaults to `run` so a bare invocation bootstraps everything
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the bootstrap steps
    Run(RunCommand),

    /// Show the step plan without executing it
    Plan(PlanCommand),
}

impl Default for Command {
    fn default() -> Self {
        Command::Run(RunCommand::default())
    }
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}

use std::ffi::OsString;
