//! Step domain model

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// An external command with its arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    /// Program name, resolved through PATH
    pub program: String,

    /// Arguments passed to the program verbatim
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// A single step in the bootstrap plan
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    /// Unique step identifier
    pub id: String,

    /// Human-readable name used for progress framing
    pub name: String,

    /// Working directory, relative to the project root
    pub dir: PathBuf,

    /// Commands executed in order inside `dir`
    pub commands: Vec<CommandSpec>,
}

impl Step {
    pub fn new(id: &str, name: &str, dir: &str, commands: Vec<CommandSpec>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            dir: PathBuf::from(dir),
            commands,
        }
    }

    /// Absolute working directory for this step
    pub fn resolved_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.dir)
    }
}

/// The fixed, ordered bootstrap plan
#[derive(Debug, Clone, Serialize)]
pub struct BootstrapPlan {
    /// Steps that always run, in order
    pub mandatory: Vec<Step>,

    /// The step gated by the environment or the interactive prompt
    pub optional: Step,

    /// Instructional note printed after the optional step succeeds
    pub completion_note: String,
}

impl BootstrapPlan {
    /// Number of steps when the optional step is selected
    pub fn total_steps(&self) -> usize {
        self.mandatory.len() + 1
    }
}

/// The plan this tool exists to run: build the API package, install the
/// Rust CLI, and optionally link the companion Node.js CLI.
pub fn default_plan() -> BootstrapPlan {
    BootstrapPlan {
        mandatory: vec![
            Step::new(
                "build-api",
                "Building API package",
                "tooling/api",
                vec![
                    CommandSpec::new("yarn", &[]),
                    CommandSpec::new("yarn", &["build"]),
                ],
            ),
            Step::new(
                "install-cli",
                "Installing Rust CLI",
                "tooling/cli",
                vec![CommandSpec::new("cargo", &["install", "--path", "."])],
            ),
        ],
        optional: Step::new(
            "link-node-cli",
            "Linking Node.js CLI",
            "tooling/cli/node",
            vec![
                CommandSpec::new("yarn", &[]),
                CommandSpec::new("yarn", &["build"]),
                CommandSpec::new("yarn", &["link"]),
            ],
        ),
        completion_note:
            "Node.js CLI linked. Run `yarn link` inside your app to use the local build."
                .to_string(),
    }
}
