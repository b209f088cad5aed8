use crate::models::TokenBundle;
use crate::services::json_file::{read_json, write_json, StoreError};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

/// Keeps the latest OAuth token bundle in a single JSON file.
///
/// Last write wins. The mutex only keeps two saves from interleaving their
/// bytes; it does not reorder them.
pub struct TokenStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn save(&self, bundle: &TokenBundle) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        write_json(&self.path, bundle).await?;
        debug!("Token bundle written to {}", self.path.display());
        Ok(())
    }

    /// `Ok(None)` significa que a Hotmart ainda não foi conectada.
    pub async fn load(&self) -> Result<Option<TokenBundle>, StoreError> {
        read_json(&self.path).await
    }
}
