use anyhow::Result;
use tracing::info;

use super::storage::SessionStorage;

/// Storage key the api key is kept under
pub const API_KEY_STORAGE_KEY: &str = "api-key";

/// The api key held in a session storage.
///
/// At most one token is stored at a time; storing a new one replaces it.
#[derive(Debug, Clone)]
pub struct Session<S> {
    storage: S,
}

impl<S: SessionStorage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Get the stored api key, if any
    pub fn token(&self) -> Result<Option<String>> {
        self.storage.get_item(API_KEY_STORAGE_KEY)
    }

    pub fn store_token(&self, token: &str) -> Result<()> {
        self.storage.set_item(API_KEY_STORAGE_KEY, token)?;
        info!("Stored api key in session storage");
        Ok(())
    }

    pub fn clear_token(&self) -> Result<()> {
        self.storage.remove_item(API_KEY_STORAGE_KEY)
    }

    /// Check if an api key is present
    pub fn is_authenticated(&self) -> bool {
        matches!(self.token(), Ok(Some(_)))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
