//! Console rendering of discussion events

use colored::{Color, Colorize};
use panel_application::{DiscussionEvent, DiscussionEventKind};
use panel_domain::{ActorId, CompletionReason, DiscussionOutcome, Roster, Topic};

/// Colors handed out to actors in roster order
const ACTOR_PALETTE: [Color; 6] = [
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Magenta,
    Color::BrightCyan,
    Color::BrightRed,
];

/// Formats discussion events for console display
pub struct ConsoleRenderer {
    actor_order: Vec<ActorId>,
}

impl ConsoleRenderer {
    pub fn new(roster: &Roster) -> Self {
        Self {
            actor_order: roster.actors().iter().map(|a| a.id.clone()).collect(),
        }
    }

    fn actor_color(&self, actor: &ActorId) -> Color {
        let index = self
            .actor_order
            .iter()
            .position(|id| id == actor)
            .unwrap_or(0);
        ACTOR_PALETTE[index % ACTOR_PALETTE.len()]
    }

    /// Banner printed before a discussion starts
    pub fn header(&self, topic: &Topic, roster: &Roster, max_rounds: usize) -> String {
        let mut output = format!("{}\n", "=== AI Panel ===".cyan().bold());
        output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), topic));
        let names: Vec<String> = roster
            .enabled()
            .map(|a| {
                a.display_name
                    .as_str()
                    .color(self.actor_color(&a.id))
                    .to_string()
            })
            .collect();
        output.push_str(&format!("{} {}\n", "Panel:".cyan().bold(), names.join(", ")));
        output.push_str(&format!(
            "{} {} (type {} + Enter to stop)\n",
            "Rounds:".cyan().bold(),
            max_rounds,
            "q".bold()
        ));
        output
    }

    /// One event as it appears on the console
    pub fn format_event(&self, event: &DiscussionEvent) -> String {
        match &event.kind {
            DiscussionEventKind::Turn { actor, .. } => format!(
                "\n{}\n{}\n",
                format!("── {} ──", event.speaker)
                    .color(self.actor_color(actor))
                    .bold(),
                event.text.trim()
            ),
            DiscussionEventKind::Directive { .. } => format!(
                "\n{} {}",
                format!("{}:", event.speaker).magenta().italic(),
                event.text.italic()
            ),
            DiscussionEventKind::Started { .. } | DiscussionEventKind::Notice => format!(
                "{} {}",
                format!("[{}]", event.speaker).cyan().bold(),
                event.text
            ),
            DiscussionEventKind::Closed { .. } => {
                format!("\n{}", format!("[{}] {}", event.speaker, event.text).dimmed())
            }
        }
    }

    /// One-line summary of how the discussion ended
    pub fn format_outcome(outcome: &DiscussionOutcome) -> String {
        let turns = outcome.turns();
        let turn_word = if turns == 1 { "turn" } else { "turns" };
        match outcome {
            DiscussionOutcome::Completed { reason, .. } => {
                let why = match reason {
                    CompletionReason::ModeratorDone => "the moderator closed the topic",
                    CompletionReason::RoundLimit => "round limit reached",
                    CompletionReason::InvalidSelection => "invalid speaker selection",
                    CompletionReason::NoEligibleSpeaker => "no actor left to speak",
                };
                format!(
                    "{} after {} {} ({})",
                    "Completed".green().bold(),
                    turns,
                    turn_word,
                    why
                )
            }
            DiscussionOutcome::Stopped { .. } => format!(
                "{} after {} {}",
                "Stopped".yellow().bold(),
                turns,
                turn_word
            ),
            DiscussionOutcome::Errored { error, .. } => format!(
                "{} after {} {}: {}",
                "Failed".red().bold(),
                turns,
                turn_word,
                error
            ),
        }
    }

    /// Listing of the roster for the `/roster` command
    pub fn format_roster(&self, roster: &Roster) -> String {
        roster
            .actors()
            .iter()
            .map(|a| {
                let marker = if a.enabled { "+".green() } else { "-".red() };
                format!(
                    "  {} {} ({}): {}",
                    marker,
                    a.display_name.as_str().color(self.actor_color(&a.id)).bold(),
                    a.id,
                    a.role_description
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_application::CLOSED_TEXT;

    fn renderer() -> ConsoleRenderer {
        ConsoleRenderer::new(&Roster::default_panel())
    }

    #[test]
    fn test_turn_shows_name_and_text() {
        let event = DiscussionEvent::turn("Expert 1", ActorId::new("expert1"), "The moon pulls.", 3);
        let text = renderer().format_event(&event);
        assert!(text.contains("Expert 1"));
        assert!(text.contains("The moon pulls."));
    }

    #[test]
    fn test_turn_text_is_trimmed_for_display() {
        let event =
            DiscussionEvent::turn("Expert 1", ActorId::new("expert1"), "\n  The moon pulls.\n\n", 3);
        let text = renderer().format_event(&event);
        assert!(text.ends_with("\nThe moon pulls.\n"));
    }

    #[test]
    fn test_no_eligible_speaker_summary() {
        let text = ConsoleRenderer::format_outcome(&DiscussionOutcome::Completed {
            reason: CompletionReason::NoEligibleSpeaker,
            turns: 0,
        });
        assert!(text.contains("no actor left"));
    }

    #[test]
    fn test_notice_and_closed_use_system_label() {
        let renderer = renderer();
        let notice = renderer.format_event(&DiscussionEvent::notice("Discussion stopped."));
        assert!(notice.contains("System"));
        assert!(notice.contains("Discussion stopped."));

        let closed = renderer.format_event(&DiscussionEvent::closed(DiscussionOutcome::Stopped {
            turns: 1,
        }));
        assert!(closed.contains(CLOSED_TEXT));
    }

    #[test]
    fn test_directive_label() {
        let event =
            DiscussionEvent::directive("Validator", ActorId::new("validator"), "Check the claim.");
        let text = renderer().format_event(&event);
        assert!(text.contains("Moderator to Validator"));
        assert!(text.contains("Check the claim."));
    }

    #[test]
    fn test_outcome_summaries() {
        let done = ConsoleRenderer::format_outcome(&DiscussionOutcome::Completed {
            reason: CompletionReason::RoundLimit,
            turns: 1,
        });
        assert!(done.contains("1 turn "));
        assert!(done.contains("round limit"));

        let failed = ConsoleRenderer::format_outcome(&DiscussionOutcome::Errored {
            error: "Timeout".to_string(),
            turns: 2,
        });
        assert!(failed.contains("2 turns"));
        assert!(failed.contains("Timeout"));
    }

    #[test]
    fn test_header_lists_enabled_actors_only() {
        let roster = Roster::new(vec![
            panel_domain::ActorProfile::new("a", "Alice", "asks"),
            panel_domain::ActorProfile::new("b", "Bob", "answers").disabled(),
        ])
        .unwrap();
        let renderer = ConsoleRenderer::new(&roster);
        let header = renderer.header(&Topic::new("Tides").unwrap(), &roster, 5);
        assert!(header.contains("Tides"));
        assert!(header.contains("Alice"));
        assert!(!header.contains("Bob"));

        let listing = renderer.format_roster(&roster);
        assert!(listing.contains("Bob"));
        assert!(listing.contains("answers"));
    }
}
