//! Editor timing and defaults.

use std::time::Duration;

use letterpress_render::DEFAULT_TEMPLATE_ID;
use serde::{Deserialize, Serialize};

/// Settings for an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Quiet period before an edit is auto-saved, in milliseconds.
    #[serde(default = "default_autosave_ms")]
    pub autosave_ms: u64,

    /// Quiet period before the preview is regenerated, in milliseconds.
    #[serde(default = "default_preview_ms")]
    pub preview_ms: u64,

    /// Template for new newsletters.
    #[serde(default = "default_template")]
    pub default_template: String,
}

fn default_autosave_ms() -> u64 {
    2000
}

fn default_preview_ms() -> u64 {
    500
}

fn default_template() -> String {
    DEFAULT_TEMPLATE_ID.to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_ms: default_autosave_ms(),
            preview_ms: default_preview_ms(),
            default_template: default_template(),
        }
    }
}

impl EditorConfig {
    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_ms)
    }

    pub fn preview_delay(&self) -> Duration {
        Duration::from_millis(self.preview_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.autosave_delay(), Duration::from_secs(2));
        assert_eq!(config.preview_delay(), Duration::from_millis(500));
        assert_eq!(config.default_template, "simple");
    }
}
