//! JSON roster file
//!
//! ```json
//! {
//!   "questioner": {"enabled": true, "name": "Questioner", "role": "curious individual"},
//!   "validator":  {"enabled": false, "name": "Validator", "role": "critical thinker"}
//! }
//! ```

use panel_domain::{ActorProfile, DomainError, Roster};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading or saving a roster file
#[derive(Error, Debug)]
pub enum RosterStoreError {
    #[error("Could not access roster file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Roster file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Roster file must be a JSON object keyed by actor id")]
    NotAnObject,

    #[error("Invalid entry for actor '{id}': {reason}")]
    InvalidEntry { id: String, reason: String },

    #[error("Roster has no enabled actors")]
    NoEnabledActors,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn enabled_by_default() -> bool {
    true
}

/// One value of the keyed mapping
#[derive(Debug, Serialize, Deserialize)]
struct StoredActor {
    #[serde(default = "enabled_by_default")]
    enabled: bool,
    name: String,
    role: String,
}

/// Reads and writes a roster as a keyed JSON mapping
pub struct JsonRosterStore {
    path: PathBuf,
}

impl JsonRosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the roster; at least one actor must be enabled
    pub fn load(&self) -> Result<Roster, RosterStoreError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| RosterStoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let roster = parse_roster(&text)?;
        debug!(
            "Loaded {} actors ({} enabled) from {}",
            roster.len(),
            roster.enabled_count(),
            self.path.display()
        );
        Ok(roster)
    }

    /// Write the roster, creating parent directories as needed
    pub fn save(&self, roster: &Roster) -> Result<(), RosterStoreError> {
        let io_error = |source| RosterStoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let text = serde_json::to_string_pretty(&roster_to_value(roster)?)?;
        std::fs::write(&self.path, text + "\n").map_err(io_error)?;
        debug!("Saved {} actors to {}", roster.len(), self.path.display());
        Ok(())
    }
}

/// Parse the keyed mapping, keeping file order
fn parse_roster(text: &str) -> Result<Roster, RosterStoreError> {
    let Value::Object(entries) = serde_json::from_str::<Value>(text)? else {
        return Err(RosterStoreError::NotAnObject);
    };

    let mut profiles = Vec::with_capacity(entries.len());
    for (id, value) in entries {
        let stored: StoredActor =
            serde_json::from_value(value).map_err(|e| RosterStoreError::InvalidEntry {
                id: id.clone(),
                reason: e.to_string(),
            })?;
        profiles.push(ActorProfile::new(id, stored.name, stored.role).with_enabled(stored.enabled));
    }

    let roster = Roster::new(profiles)?;
    if roster.enabled_count() == 0 {
        return Err(RosterStoreError::NoEnabledActors);
    }
    Ok(roster)
}

fn roster_to_value(roster: &Roster) -> Result<Value, RosterStoreError> {
    let mut entries = Map::new();
    for actor in roster.actors() {
        let stored = StoredActor {
            enabled: actor.enabled,
            name: actor.display_name.clone(),
            role: actor.role_description.clone(),
        };
        entries.insert(actor.id.to_string(), serde_json::to_value(stored)?);
    }
    Ok(Value::Object(entries))
}
