//! CLI entrypoint for AI Panel
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use panel_application::DiscussionOrchestrator;
use panel_domain::{DiscussionOutcome, Roster, Topic};
use panel_infrastructure::{
    ConfigLoader, FileConfig, JsonRosterStore, JsonlConversationLogger, OllamaGateway,
};
use panel_presentation::{Cli, ConsoleConfig, ConsoleSession};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the stderr subscriber and, if requested, a plain-text log file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Could not create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Overlay command line flags on the merged configuration
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(rounds) = cli.rounds {
        config.discussion.max_rounds = rounds;
    }
    if let Some(policy) = cli.on_actor_failure {
        config.discussion.on_actor_failure = policy;
    }
    if let Some(model) = &cli.model {
        config.model.name = model.clone();
    }
    if let Some(endpoint) = &cli.endpoint {
        config.ollama.endpoint = endpoint.clone();
    }
    if let Some(transcript) = &cli.transcript {
        config.output.transcript = Some(transcript.clone());
    }
    if cli.quiet {
        config.output.show_progress = false;
    }
}

fn load_roster(cli: &Cli, config: &FileConfig) -> Result<Roster> {
    if let Some(path) = &cli.roster {
        let roster = JsonRosterStore::new(path)
            .load()
            .with_context(|| format!("Failed to load roster from {}", path.display()))?;
        return Ok(roster);
    }
    Ok(config.roster()?.unwrap_or_else(Roster::default_panel))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting AI Panel");

    if cli.show_config {
        println!("Configuration sources (strongest first):");
        for source in ConfigLoader::config_sources(cli.config.as_ref()) {
            println!("  {}", source);
        }
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;
    for warning in config.warnings() {
        warn!("{}", warning);
    }

    let roster = load_roster(&cli, &config)?;

    if let Some(path) = &cli.save_roster {
        JsonRosterStore::new(path)
            .save(&roster)
            .with_context(|| format!("Failed to save roster to {}", path.display()))?;
        println!("Saved {} actors to {}", roster.len(), path.display());
        return Ok(());
    }

    // === Dependency Injection ===
    let gateway = Arc::new(OllamaGateway::new(
        &config.ollama.endpoint,
        config.ollama.timeout_seconds.map(Duration::from_secs),
    )?);

    let mut orchestrator = DiscussionOrchestrator::new(
        gateway,
        config.model.to_model_config(),
        roster,
        config.discussion.to_settings(),
    )?;

    if let Some(path) = &config.output.transcript {
        let logger = JsonlConversationLogger::open(path)
            .with_context(|| format!("Failed to open transcript {}", path.display()))?;
        info!("Writing transcript to {}", logger.path().display());
        orchestrator = orchestrator.with_logger(Arc::new(logger));
    }

    let console = ConsoleConfig::default()
        .with_color(config.output.color)
        .with_progress(config.output.show_progress);
    let mut session = ConsoleSession::new(orchestrator, console);

    // Single topic mode
    if let Some(topic) = cli.topic {
        let topic = Topic::new(topic)?;
        if let DiscussionOutcome::Errored { error, .. } = session.discuss(topic).await? {
            bail!("Discussion ended with an error: {}", error);
        }
        return Ok(());
    }

    session.run_interactive().await?;

    Ok(())
}
