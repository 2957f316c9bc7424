use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::KeyValueStore;

/// App directory name under the platform data dir
const APP_NAME: &str = "chaincred";

/// File-per-key storage under an app-owned directory.
///
/// Fallback for platforms where no OS keychain is available. Keys map
/// directly to file names, so callers stick to simple dotted identifiers.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at the platform data directory (e.g. `~/.local/share/chaincred`).
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(Self {
            dir: data_dir.join(APP_NAME),
        })
    }

    /// Store rooted at an explicit directory.
    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}
