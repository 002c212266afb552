//! Application configuration.
//!
//! Deployment-level settings: where the annotation API lives and which
//! category taxonomy is in force. The taxonomy must stay in sync with the
//! server-side enum, which is why it is configuration rather than code.

use serde::{Deserialize, Serialize};

use crate::model::CategorySet;

/// Current configuration file format version.
/// Increment when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Configuration loaded at startup and round-trippable as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format.
    pub version: u32,

    /// Base URL of the annotation platform's REST API.
    pub api_base_url: String,

    /// Category taxonomy shared with the server.
    #[serde(default)]
    pub categories: CategorySet,
}

impl AppConfig {
    /// Create a config for the given API with the default taxonomy.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            version: CONFIG_VERSION,
            api_base_url: api_base_url.into(),
            categories: CategorySet::default(),
        }
    }

    /// Serialize to pretty JSON for export.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a previously exported configuration.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
