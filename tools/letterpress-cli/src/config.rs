//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use letterpress_editor::EditorConfig;
use letterpress_render::RenderOptions;
use letterpress_store::DEFAULT_KEY;
use serde::{Deserialize, Serialize};

use crate::logging::LoggingConfig;

/// File names searched for, in order, from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["letterpress.toml", ".letterpress.toml", "letterpress.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where newsletters are kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Editor timing and defaults.
    #[serde(default)]
    pub editor: EditorConfig,

    /// Footer values for rendered emails.
    #[serde(default)]
    pub render: RenderOptions,

    /// Log level and format.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `<key>.json`, relative to the working directory.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Blob key (default: newsletters).
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_dir() -> String {
    ".letterpress".to_string()
}

fn default_key() -> String {
    DEFAULT_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            key: default_key(),
        }
    }
}

/// Generate a default letterpress.toml.
pub fn generate_default_config(company: &str) -> String {
    format!(
        r##"# Letterpress configuration

[storage]
dir = ".letterpress"
key = "newsletters"

[editor]
autosave_ms = 2000
preview_ms = 500
default_template = "simple"

[render]
company_name = {company}
copyright_year = 2025
unsubscribe_url = "#"

[logging]
level = "warn"
format = "human"
"##,
        company = toml::Value::String(company.to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogFormat;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.storage.key, "newsletters");
        assert_eq!(config.editor.autosave_ms, 2000);
        assert_eq!(config.render.company_name, "Your Company Name");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config("Acme")).unwrap();
        assert_eq!(config.render.company_name, "Acme");
        assert_eq!(config.editor.preview_ms, 500);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_generated_config_quotes_company() {
        let config: CliConfig = toml::from_str(&generate_default_config(r#"Say "hi""#)).unwrap();
        assert_eq!(config.render.company_name, r#"Say "hi""#);
    }

    #[test]
    fn test_partial_sections() {
        let config: CliConfig = toml::from_str(
            r#"
[editor]
autosave_ms = 100

[logging]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.editor.autosave_ms, 100);
        assert_eq!(config.editor.preview_ms, 500);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letterpress.json");

        let mut config = CliConfig::default();
        config.storage.dir = "data".to_string();
        config.save(&path).unwrap();

        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }
}
