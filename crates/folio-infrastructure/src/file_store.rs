//! File-backed session store.

use folio_core::error::{FolioError, Result};
use folio_core::session::SessionStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A [`SessionStore`] persisting each key as a file under a base
/// directory.
///
/// Layout:
/// ```text
/// base_dir/
/// └── folio.session.json
/// ```
///
/// Values are opaque strings; the manager decides their format.
#[derive(Debug)]
pub struct FileSessionStore {
    base_dir: PathBuf,
}

impl FileSessionStore {
    /// Creates a store rooted at `base_dir`, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)
            .map_err(|e| FolioError::storage(format!("failed to create {base_dir:?}: {e}")))?;
        Ok(Self { base_dir })
    }

    /// Creates a store at the default location (`~/.folio`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or
    /// the directory cannot be created.
    pub fn default_location() -> Result<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| FolioError::storage("failed to determine home directory"))?;
        Self::new(home_dir.join(".folio"))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl SessionStore for FileSessionStore {
    /// Reads the value for `key`; unreadable entries are treated as
    /// absent (the caller's fail-safe default is the anonymous
    /// session).
    fn get(&self, key: &str) -> Option<String> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn!(?path, %err, "failed to read stored value, treating as absent");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        fs::write(&path, value)
            .map_err(|e| FolioError::storage(format!("failed to write {path:?}: {e}")))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(FolioError::storage(format!(
                "failed to remove {path:?}: {err}"
            ))),
        }
    }
}
