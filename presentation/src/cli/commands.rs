//! CLI command definitions

use clap::Parser;
use panel_application::ActorFailurePolicy;
use std::path::PathBuf;

/// CLI arguments for ai-panel
#[derive(Parser, Debug)]
#[command(name = "ai-panel")]
#[command(author, version, about = "AI Panel - a moderated discussion between LLM personas")]
#[command(long_about = r#"
AI Panel runs a moderated discussion between several LLM personas on a topic.

Each round a moderator chooses who speaks next and tells them what to focus on.
The chosen actor answers in character, seeing the last few messages of the
discussion. The panel stops when the moderator is done, the round limit is
reached, or you type "q" and press Enter.

Configuration files are loaded from (in priority order):
1. AI_PANEL_* environment variables (e.g. AI_PANEL_MODEL__NAME)
2. --config <path>     Explicit config file
3. ./panel.toml        Project-level config
4. ~/.config/ai-panel/config.toml   Global config

Example:
  ai-panel "Why do tides happen?"
  ai-panel -r 6 -m mistral "Is a hot dog a sandwich?"
  ai-panel --roster roster.json
"#)]
pub struct Cli {
    /// The topic to discuss (interactive mode when omitted)
    pub topic: Option<String>,

    /// Maximum number of rounds
    #[arg(short, long, value_name = "N")]
    pub rounds: Option<usize>,

    /// Ollama model used by the moderator and every actor
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Load the panel from a JSON roster file
    #[arg(long, value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// What to do when an actor fails to respond: abort or skip
    #[arg(long, value_name = "POLICY")]
    pub on_actor_failure: Option<ActorFailurePolicy>,

    /// Ollama server URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write the active roster to a JSON file and exit
    #[arg(long, value_name = "PATH")]
    pub save_roster: Option<PathBuf>,

    /// Append a JSONL transcript of each discussion to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,
}
