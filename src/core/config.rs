//! Bootstrap configuration from the process environment

use std::path::PathBuf;
use tracing::warn;

/// Environment variable gating the optional Node.js CLI step
pub const INSTALL_NODE_CLI_ENV: &str = "INSTALL_NODE_CLI";

/// How the optional-step decision is made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCliSetting {
    /// Variable unset: ask interactively
    Prompt,

    /// Variable set to "1": install without asking
    Install,

    /// Variable set to anything else: skip without asking
    Skip,
}

impl NodeCliSetting {
    /// Parse the raw environment value.
    ///
    /// Only the literal "1" enables the install; every other set value is a
    /// skip. Unrecognized values get a warning so typos like "true" are
    /// visible instead of silently skipping.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            None => NodeCliSetting::Prompt,
            Some("1") => NodeCliSetting::Install,
            Some(other) => {
                if !matches!(other, "" | "0") {
                    warn!(
                        "{}={:?} is not \"1\"; skipping the Node.js CLI install",
                        INSTALL_NODE_CLI_ENV, other
                    );
                }
                NodeCliSetting::Skip
            }
        }
    }
}

/// Immutable run configuration, read once at startup
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Optional-step gate
    pub node_cli: NodeCliSetting,

    /// Project root all step directories are resolved against
    pub root: PathBuf,
}

impl BootstrapConfig {
    /// Read the configuration from the process environment
    pub fn from_env(root: PathBuf) -> Self {
        let raw = std::env::var(INSTALL_NODE_CLI_ENV).ok();
        Self {
            node_cli: NodeCliSetting::from_env_value(raw.as_deref()),
            root,
        }
    }
}
