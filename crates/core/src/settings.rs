//! Command configuration.
//!
//! The persisted blob uses camelCase keys and may omit fields written
//! by older versions, so every field falls back to its default when
//! absent.

use serde::{Deserialize, Serialize};

/// Settings consumed by the slide copy command.
///
/// Passed in by value at invocation time; the command never reads
/// ambient or global configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlideSettings {
    /// Master switch; when off the command refuses to run.
    pub enabled: bool,

    /// Vault folder to place slide copies in. Empty means the vault
    /// root.
    pub output_folder: String,
}

impl Default for SlideSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            output_folder: String::new(),
        }
    }
}
