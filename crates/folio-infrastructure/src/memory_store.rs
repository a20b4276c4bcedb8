//! In-memory session store.

use folio_core::error::Result;
use folio_core::session::SessionStore;
use std::collections::HashMap;

/// A [`SessionStore`] backed by a plain map.
///
/// The stand-in for browser local storage when none is available, and
/// the store of choice in tests.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: HashMap<String, String>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
