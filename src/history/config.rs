use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigResult;

/// What recording a new unit does to units that were undone before it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedoPolicy {
    /// Undone units stay redoable after a new recording
    #[default]
    Preserve,
    /// A new recording empties the redo sequence first
    DiscardOnRecord,
}

/// Tunables for a [`HistoryStore`](super::HistoryStore)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)] // missing fields fall back to defaults
pub struct HistoryConfig {
    pub redo_policy: RedoPolicy,
}

impl HistoryConfig {
    /// Parse a config from its JSON form
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
