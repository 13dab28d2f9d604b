//! Prompt templates for a discussion round

use crate::actor::profile::{ActorId, ActorProfile};
use crate::conversation::message::Message;

/// Task framing used when the moderator gave an actor no instruction
pub const GENERIC_FRAMING: &str =
    "Respond to the discussion based on the previous context and your role.";

/// Templates for generating prompts at each step of a round
pub struct PromptTemplate;

impl PromptTemplate {
    /// System message that opens every discussion
    pub fn start_message(topic: &str) -> String {
        format!("Starting discussion on topic: {}", topic)
    }

    /// Prompt for one actor turn.
    ///
    /// Sections always appear in this order: identity, task framing, context
    /// window, current message, closing reminder.
    pub fn actor_prompt(
        profile: &ActorProfile,
        instruction: Option<&str>,
        context: &[Message],
        message: &str,
    ) -> String {
        let framing = instruction
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(GENERIC_FRAMING);

        let context_str = context
            .iter()
            .map(Message::context_line)
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"You are {name}, a {role}.
{framing}

Previous context:
{context_str}

Current message: {message}

Respond in character as {name}, the {role}."#,
            name = profile.display_name,
            role = profile.role_description,
        )
    }

    /// One line per selectable actor, as shown to the moderator
    pub fn actor_descriptions<'a>(actors: impl IntoIterator<Item = &'a ActorProfile>) -> String {
        actors
            .into_iter()
            .map(|a| {
                format!(
                    "- Actor \"{}\" with the name \"{}\" is {}",
                    a.id, a.display_name, a.role_description
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Style directive for the discussion length
    pub fn style_guide(is_brief: bool) -> &'static str {
        if is_brief {
            "Keep responses concise and focused on key points."
        } else {
            "Allow for detailed exploration and comprehensive answers."
        }
    }

    /// Extra guidance for the wind-down round
    pub fn last_round_guide() -> &'static str {
        r#"Since this is the last round, consider:
1. If the topic needs a final summary, choose an expert
2. If key points are unclear, choose the validator
3. If the discussion feels complete, choose "done""#
    }

    /// Instruction asking the moderator to choose the next speaker
    pub fn moderator_selection<'a>(
        topic: &str,
        actors: impl IntoIterator<Item = &'a ActorProfile>,
        previous: Option<&ActorId>,
        is_last_round: bool,
        is_brief: bool,
    ) -> String {
        let mut prompt = format!(
            r#"Based on the discussion so far about '{}', you need to:
1. Choose who should speak next from the actors list below, or select "done" if no more discussion is required.
2. Provide a clear reason for your choice and what they should focus on, phrased as an instruction or question to the selected actor. Always mention the actor's name.

If the discussion has not started yet, open it with a thesis about the topic.

"#,
            topic
        );

        match previous {
            Some(previous) => prompt.push_str(&format!(
                "Select one of the following actors except \"{}\":\n",
                previous
            )),
            None => prompt.push_str("Select one of the following actors:\n"),
        }
        prompt.push_str(&Self::actor_descriptions(actors));
        prompt.push_str(&format!(
            "\n\nDiscussion style: {}\n",
            Self::style_guide(is_brief)
        ));

        if is_last_round {
            prompt.push('\n');
            prompt.push_str(Self::last_round_guide());
            prompt.push('\n');
        }

        prompt.push_str(
            r#"
Do not choose the last actor again.
Answer with a single JSON object and nothing else:
{"actor": "<actor id or done>", "reason": "<instruction for the selected actor>"}"#,
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::history::ConversationHistory;
    use crate::conversation::message::Speaker;

    fn profile() -> ActorProfile {
        ActorProfile::new("tester", "Test Actor", "test role")
    }

    #[test]
    fn test_actor_prompt_exact_layout() {
        let mut history = ConversationHistory::new();
        history.append(Speaker::System, "Starting discussion");
        history.append(Speaker::Actor(ActorId::new("expert1")), "Previous response");

        let prompt = PromptTemplate::actor_prompt(
            &profile(),
            Some("Ask about the moon."),
            history.context_window(),
            "Tides",
        );

        assert_eq!(
            prompt,
            "You are Test Actor, a test role.\n\
             Ask about the moon.\n\
             \n\
             Previous context:\n\
             system: Starting discussion\n\
             expert1: Previous response\n\
             \n\
             Current message: Tides\n\
             \n\
             Respond in character as Test Actor, the test role."
        );
    }

    #[test]
    fn test_actor_prompt_generic_framing() {
        let prompt = PromptTemplate::actor_prompt(&profile(), None, &[], "Tides");
        assert!(prompt.contains(GENERIC_FRAMING));

        let blank = PromptTemplate::actor_prompt(&profile(), Some("   "), &[], "Tides");
        assert!(blank.contains(GENERIC_FRAMING));
    }

    #[test]
    fn test_selection_prompt_lists_actors_and_previous() {
        let actors = [
            ActorProfile::new("expert1", "Expert 1", "test expert role"),
            ActorProfile::new("questioner", "Questioner", "test questioner role"),
        ];
        let previous = ActorId::new("expert1");
        let prompt =
            PromptTemplate::moderator_selection("tides", &actors, Some(&previous), false, true);

        assert!(prompt.contains("'tides'"));
        assert!(prompt.contains("Expert 1"));
        assert!(prompt.contains("test questioner role"));
        assert!(prompt.contains("except \"expert1\""));
        assert!(prompt.contains("Keep responses concise"));
        assert!(!prompt.contains("last round"));
        assert!(prompt.contains(r#""actor""#));
    }

    #[test]
    fn test_selection_prompt_last_round_guidance() {
        let actors = [ActorProfile::new("expert1", "Expert 1", "expert")];
        let prompt = PromptTemplate::moderator_selection("tides", &actors, None, true, false);
        assert!(prompt.contains("Since this is the last round"));
        assert!(prompt.contains("Allow for detailed exploration"));
        assert!(!prompt.contains("except"));
    }

    #[test]
    fn test_start_message() {
        assert_eq!(
            PromptTemplate::start_message("Tides"),
            "Starting discussion on topic: Tides"
        );
    }
}
