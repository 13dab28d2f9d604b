//! Interactive console session

use crate::config::ConsoleConfig;
use crate::output::console::ConsoleRenderer;
use crate::progress::spinner::TurnSpinner;
use colored::Colorize;
use panel_application::{DiscussionEvent, DiscussionEventKind, DiscussionOrchestrator, LlmGateway};
use panel_domain::{DiscussionOutcome, Topic};
use std::io::Write;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

/// Errors that end a console session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Could not read from the terminal: {0}")]
    Input(#[from] std::io::Error),

    #[error("Discussion worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    #[error("The panel was lost after a previous failure")]
    PanelUnavailable,
}

/// What a line typed at the topic prompt means
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    Help,
    Roster,
    Empty,
    Topic(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "quit" | "exit" | "/quit" | "/exit" | "/q" => Command::Quit,
        "/help" | "/h" | "/?" => Command::Help,
        "/roster" => Command::Roster,
        _ => Command::Topic(line.to_string()),
    }
}

fn is_stop_request(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("q")
}

/// Owns the orchestrator between discussions and the terminal input
pub struct ConsoleSession<G: LlmGateway + ?Sized + 'static> {
    orchestrator: Option<DiscussionOrchestrator<G>>,
    renderer: ConsoleRenderer,
    config: ConsoleConfig,
    input: Lines<BufReader<Stdin>>,
    input_open: bool,
}

impl<G: LlmGateway + ?Sized + 'static> ConsoleSession<G> {
    pub fn new(orchestrator: DiscussionOrchestrator<G>, config: ConsoleConfig) -> Self {
        if !config.color {
            colored::control::set_override(false);
        }
        Self {
            renderer: ConsoleRenderer::new(orchestrator.roster()),
            orchestrator: Some(orchestrator),
            config,
            input: BufReader::new(tokio::io::stdin()).lines(),
            input_open: true,
        }
    }

    /// Run one discussion, printing events until it closes
    pub async fn discuss(&mut self, topic: Topic) -> Result<DiscussionOutcome, SessionError> {
        let orchestrator = self
            .orchestrator
            .take()
            .ok_or(SessionError::PanelUnavailable)?;

        println!(
            "{}",
            self.renderer.header(
                &topic,
                orchestrator.roster(),
                orchestrator.settings().max_rounds
            )
        );

        let mut running = orchestrator.spawn(topic);
        let spinner = TurnSpinner::new(self.config.show_progress);
        spinner.set_message("The moderator is choosing a speaker...");

        loop {
            tokio::select! {
                event = running.events.recv() => {
                    let Some(event) = event else { break };
                    spinner.println(&self.renderer.format_event(&event));
                    spinner.set_message(waiting_message(&event));
                }
                line = self.input.next_line(), if self.input_open => {
                    match line {
                        Ok(Some(line)) if is_stop_request(&line) => {
                            running.stop.stop();
                            spinner.set_message("Stopping after the current turn...");
                        }
                        Ok(Some(line)) => debug!("Ignoring input during discussion: {}", line),
                        Ok(None) => self.input_open = false,
                        Err(e) => {
                            debug!("Terminal input closed: {}", e);
                            self.input_open = false;
                        }
                    }
                }
            }
        }
        spinner.finish();

        let (orchestrator, outcome) = running.task.await?;
        self.orchestrator = Some(orchestrator);

        println!("{}\n", ConsoleRenderer::format_outcome(&outcome));
        Ok(outcome)
    }

    /// Ask for topics until the user quits or input ends
    pub async fn run_interactive(&mut self) -> Result<(), SessionError> {
        self.print_welcome();

        loop {
            print!("{} ", "topic>".green().bold());
            std::io::stdout().flush()?;

            let Some(line) = self.input.next_line().await? else {
                println!();
                break;
            };

            match parse_command(&line) {
                Command::Quit => break,
                Command::Empty => continue,
                Command::Help => self.print_help(),
                Command::Roster => {
                    if let Some(orchestrator) = &self.orchestrator {
                        println!("{}", self.renderer.format_roster(orchestrator.roster()));
                    }
                }
                Command::Topic(text) => match Topic::new(text) {
                    Ok(topic) => {
                        self.discuss(topic).await?;
                    }
                    Err(e) => println!("{} {}", "Error:".red().bold(), e),
                },
            }

            if !self.input_open {
                break;
            }
        }

        println!("Bye!");
        Ok(())
    }

    fn print_welcome(&self) {
        println!("{}", "=== AI Panel ===".cyan().bold());
        println!("Enter a topic to start a discussion. Type /help for commands.\n");
    }

    fn print_help(&self) {
        println!("{}", "Commands:".cyan().bold());
        println!("  <topic>   Start a discussion on the topic");
        println!("  q         Stop the running discussion after the current turn");
        println!("  /roster   Show the panel");
        println!("  /help     Show this help");
        println!("  quit      Exit");
    }
}

/// Spinner text after an event was printed
fn waiting_message(event: &DiscussionEvent) -> String {
    match &event.kind {
        DiscussionEventKind::Directive { .. } => {
            let name = event.speaker.trim_start_matches("Moderator to ");
            format!("{} is thinking...", name)
        }
        DiscussionEventKind::Closed { .. } => String::new(),
        _ => "The moderator is choosing a speaker...".to_string(),
    }
}
