//! Session persistence trait.
//!
//! Defines the key-value contract the session manager persists
//! through, decoupling the core from the concrete backend (in-memory
//! map, files on disk, browser local storage behind a binding).

use crate::error::Result;

/// The fixed key the session is persisted under.
pub const SESSION_KEY: &str = "folio.session";

/// A string key-value persistence backend.
///
/// Operations are synchronous and atomic at this scale: a `set` either
/// fully replaces the value or fails, with no partial-write exposure
/// to the caller.
pub trait SessionStore {
    /// Returns the stored value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot complete the write.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`.
    ///
    /// Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot complete the removal.
    fn remove(&mut self, key: &str) -> Result<()>;
}
