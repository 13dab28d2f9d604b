//! Discussion configuration from TOML (`[discussion]` section)

use panel_application::{ActorFailurePolicy, DiscussionSettings};
use serde::{Deserialize, Serialize};

/// Raw discussion configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDiscussionConfig {
    pub max_rounds: usize,
    pub last_round_margin: usize,
    pub brief_threshold: usize,
    /// "abort" or "skip"
    pub on_actor_failure: ActorFailurePolicy,
    pub announce_directives: bool,
}

impl Default for FileDiscussionConfig {
    fn default() -> Self {
        let defaults = DiscussionSettings::default();
        Self {
            max_rounds: defaults.max_rounds,
            last_round_margin: defaults.last_round_margin,
            brief_threshold: defaults.brief_threshold,
            on_actor_failure: defaults.on_actor_failure,
            announce_directives: defaults.announce_directives,
        }
    }
}

impl FileDiscussionConfig {
    pub fn to_settings(&self) -> DiscussionSettings {
        DiscussionSettings::default()
            .with_max_rounds(self.max_rounds)
            .with_last_round_margin(self.last_round_margin)
            .with_brief_threshold(self.brief_threshold)
            .with_actor_failure_policy(self.on_actor_failure)
            .with_announce_directives(self.announce_directives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discussion_section_deserialize() {
        let toml_str = r#"
[discussion]
max_rounds = 4
on_actor_failure = "skip"
announce_directives = true
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let settings = config.discussion.to_settings();
        assert_eq!(settings.max_rounds, 4);
        assert_eq!(settings.last_round_margin, 2);
        assert_eq!(settings.on_actor_failure, ActorFailurePolicy::Skip);
        assert!(settings.announce_directives);
    }

    #[test]
    fn test_unknown_failure_policy_rejected() {
        let toml_str = r#"
[discussion]
on_actor_failure = "retry"
"#;
        assert!(toml::from_str::<super::super::FileConfig>(toml_str).is_err());
    }
}
