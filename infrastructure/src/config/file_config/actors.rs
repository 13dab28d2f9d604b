//! Roster entries from TOML (`[[actors]]` array)

use panel_domain::ActorProfile;
use serde::{Deserialize, Serialize};

fn enabled_by_default() -> bool {
    true
}

/// One `[[actors]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileActorConfig {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl FileActorConfig {
    pub fn to_profile(&self) -> ActorProfile {
        ActorProfile::new(self.id.trim(), self.name.trim(), self.role.trim())
            .with_enabled(self.enabled)
    }
}

impl From<&ActorProfile> for FileActorConfig {
    fn from(profile: &ActorProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            name: profile.display_name.clone(),
            role: profile.role_description.clone(),
            enabled: profile.enabled,
        }
    }
}
