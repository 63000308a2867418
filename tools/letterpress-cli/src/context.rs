//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use chrono::Utc;
use letterpress_core::{NewsletterId, NewsletterRecord};
use letterpress_store::{FileBlobStore, NewsletterStore};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }

    /// Directory newsletters are stored in.
    pub fn data_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.dir)
    }

    /// Open the newsletter store.
    pub fn store(&self) -> Arc<NewsletterStore<FileBlobStore>> {
        Arc::new(NewsletterStore::with_key(
            FileBlobStore::new(self.data_dir()),
            self.config.storage.key.clone(),
        ))
    }

    /// Load one newsletter or fail with a readable message.
    pub fn load_record(&self, id: &str) -> Result<NewsletterRecord> {
        self.store()
            .try_get(&NewsletterId::new(id))
            .context("Failed to read newsletters")?
            .with_context(|| format!("Newsletter not found: {}", id))
    }

    /// Bump `updatedAt` and persist.
    pub fn save_record(&self, record: &mut NewsletterRecord) -> Result<()> {
        record.touch(Utc::now());
        self.store()
            .try_upsert(record)
            .with_context(|| format!("Failed to save newsletter {}", record.id))
    }
}

/// Find the nearest config file, walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".letterpress.toml"), "").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, dir.path().join(".letterpress.toml"));
    }

    #[test]
    fn test_find_config_prefers_first_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("letterpress.json"), "{}").unwrap();
        std::fs::write(dir.path().join("letterpress.toml"), "").unwrap();

        let found = find_config(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("letterpress.toml"));
    }
}
