use crate::error::Result;
use crate::resolver::{DEFAULT_CUTOFF, DEFAULT_MAX_SUGGESTIONS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_SNAPSHOT: &str = "addressbook";
const DEFAULT_NOTES_SNAPSHOT: &str = "notes";

/// Configuration for the organizer, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrganizerConfig {
    /// Snapshot name of the contact store
    #[serde(default = "default_contacts_snapshot")]
    pub contacts_snapshot: String,

    /// Snapshot name of the note store
    #[serde(default = "default_notes_snapshot")]
    pub notes_snapshot: String,

    /// How many "did you mean" suggestions to offer for an unknown command
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Minimum similarity (0.0 to 1.0) for a suggestion
    #[serde(default = "default_cutoff")]
    pub suggestion_cutoff: f64,
}

fn default_contacts_snapshot() -> String {
    DEFAULT_CONTACTS_SNAPSHOT.to_string()
}

fn default_notes_snapshot() -> String {
    DEFAULT_NOTES_SNAPSHOT.to_string()
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

fn default_cutoff() -> f64 {
    DEFAULT_CUTOFF
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            contacts_snapshot: default_contacts_snapshot(),
            notes_snapshot: default_notes_snapshot(),
            max_suggestions: default_max_suggestions(),
            suggestion_cutoff: default_cutoff(),
        }
    }
}

impl OrganizerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: OrganizerConfig = serde_json::from_str(&content)?;
        Ok(config.clamped())
    }

    fn clamped(mut self) -> Self {
        self.suggestion_cutoff = self.suggestion_cutoff.clamp(0.0, 1.0);
        self
    }
}
