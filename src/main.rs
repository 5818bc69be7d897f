mod cli;
mod core;
mod execution;

use anyhow::{Context, Result};
use cli::commands::{PlanCommand, RunCommand};
use cli::output::{format_event, style, INFO};
use cli::prompt::InteractivePrompt;
use cli::{Cli, Command};
use crate::core::{default_plan, BootstrapConfig};
use execution::{Orchestrator, ProcessRunner};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command (a bare invocation runs the bootstrap)
    match cli.command.unwrap_or_default() {
        Command::Run(cmd) => run_bootstrap(&cmd).await?,
        Command::Plan(cmd) => show_plan(&cmd)?,
    }

    Ok(())
}

async fn run_bootstrap(cmd: &RunCommand) -> Result<()> {
    let root = match &cmd.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Failed to resolve the current directory")?,
    };
    let config = BootstrapConfig::from_env(root);
    let plan = default_plan();

    println!(
        "{} Bootstrapping workspace tooling in {}",
        INFO,
        style(config.root.display()).bold()
    );

    let orchestrator = Orchestrator::new(ProcessRunner);
    orchestrator
        .add_event_handler(|event| println!("{}", format_event(&event)))
        .await;

    let mut prompt = InteractivePrompt::stdin();
    if let Err(err) = orchestrator.run(&plan, &config, &mut prompt).await {
        error!("{}", err);
        // Propagate the failing command's exit code
        std::process::exit(err.exit_code());
    }

    Ok(())
}

fn show_plan(cmd: &PlanCommand) -> Result<()> {
    let plan = default_plan();

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("{} Bootstrap plan:", INFO);
    for step in &plan.mandatory {
        println!(
            "  {} ({})",
            style(&step.name).bold(),
            style(step.dir.display()).dim()
        );
        for command in &step.commands {
            println!("    $ {}", command);
        }
    }
    println!(
        "  {} ({}) {}",
        style(&plan.optional.name).bold(),
        style(plan.optional.dir.display()).dim(),
        style("[optional]").yellow()
    );
    for command in &plan.optional.commands {
        println!("    $ {}", command);
    }

    Ok(())
}
