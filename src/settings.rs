//! Editor configuration.
//!
//! Embedders can tweak interaction feel without recompiling; everything has
//! a sensible default and the struct round-trips through JSON so a host
//! application can persist it alongside its own settings.

use crate::constants::{CLONE_OFFSET, SPAWN_JITTER, WHEEL_ZOOM_STEP, ZOOM_STEP};
use serde::{Deserialize, Serialize};

/// Tunable interaction parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Zoom change per toolbar button press.
    pub zoom_step: f32,
    /// Zoom change per wheel notch.
    pub wheel_zoom_step: f32,
    /// Maximum random offset applied to newly spawned nodes.
    pub spawn_jitter: f32,
    /// Position offset applied to cloned nodes.
    pub clone_offset: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            zoom_step: ZOOM_STEP,
            wheel_zoom_step: WHEEL_ZOOM_STEP,
            spawn_jitter: SPAWN_JITTER,
            clone_offset: CLONE_OFFSET,
        }
    }
}

impl EditorConfig {
    /// Parse a config document, falling back to defaults for missing
    /// fields. Unknown fields are ignored.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
