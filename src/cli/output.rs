//! CLI output formatting

use crate::execution::BootstrapEvent;
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static SPINNER: Emoji<'_, '_> = Emoji("⏳ ", "~ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

/// Format a bootstrap event for the console.
///
/// This is framing text only; the spawned commands write their own output
/// directly to the inherited stdio.
pub fn format_event(event: &BootstrapEvent) -> String {
    match event {
        BootstrapEvent::StepStarted { name, .. } => {
            format!("{} {}...", SPINNER, style(name).bold())
        }
        BootstrapEvent::CommandStarted { command, .. } => {
            format!("  {} {}", style("$").dim(), style(command).dim())
        }
        BootstrapEvent::StepCompleted { step_id } => {
            format!("{} {}", CHECK, style(step_id).green())
        }
        BootstrapEvent::StepFailed { step_id, exit_code } => format!(
            "{} {} (exit code {})",
            CROSS,
            style(step_id).red(),
            exit_code
        ),
        BootstrapEvent::OptionalSkipped => {
            format!("{} Skipping the Node.js CLI install", INFO)
        }
        BootstrapEvent::CompletionNote { note } => format!("{} {}", INFO, note),
        BootstrapEvent::BootstrapCompleted => {
            format!("{} Workspace tooling is ready", ROCKET)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_event_names_step_and_code() {
        let rendered = format_event(&BootstrapEvent::StepFailed {
            step_id: "install-cli".to_string(),
            exit_code: 101,
        });
        assert!(rendered.contains("install-cli"));
        assert!(rendered.contains("101"));
    }

    #[test]
    fn test_completion_note_passes_through() {
        let rendered = format_event(&BootstrapEvent::CompletionNote {
            note: "run yarn link".to_string(),
        });
        assert!(rendered.contains("run yarn link"));
    }
}
