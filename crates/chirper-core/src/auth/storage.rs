use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Session storage file name in cache directory
const STORAGE_FILE: &str = "session.json";

/// String key/value store scoped to one session.
///
/// Methods take `&self` so a storage handle can be shared between the
/// handlers that write to it. Writes to an existing key overwrite it.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// In-process storage. Clones share the same map and everything is gone
/// when the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

fn poisoned<T>(_: T) -> anyhow::Error {
    anyhow!("Session storage lock poisoned")
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.write().map_err(poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.write().map_err(poisoned)?;
        items.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut items = self.items.write().map_err(poisoned)?;
        items.clear();
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StorageFile {
    #[serde(default)]
    items: HashMap<String, String>,
    updated_at: Option<DateTime<Utc>>,
}

/// Storage persisted as JSON in the cache directory, so a session
/// survives between command line invocations.
#[derive(Debug, Clone)]
pub struct FileStorage {
    cache_dir: PathBuf,
}

impl FileStorage {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.cache_dir.join(STORAGE_FILE)
    }

    /// When the storage file was last written, if it exists
    pub fn updated_at(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.read()?.updated_at)
    }

    fn read(&self) -> Result<StorageFile> {
        let path = self.path();
        if !path.exists() {
            return Ok(StorageFile::default());
        }
        let contents = std::fs::read_to_string(&path)
            .context("Failed to read session file")?;
        serde_json::from_str(&contents).context("Failed to parse session file")
    }

    fn write(&self, mut file: StorageFile) -> Result<()> {
        let path = self.path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        file.updated_at = Some(Utc::now());
        let contents = serde_json::to_string_pretty(&file)?;
        std::fs::write(&path, contents).context("Failed to write session file")?;
        debug!(path = %path.display(), "Session file written");
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.items.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut file = self.read()?;
        file.items.insert(key.to_string(), value.to_string());
        self.write(file)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut file = self.read()?;
        if file.items.remove(key).is_some() {
            self.write(file)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let path = self.path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}
