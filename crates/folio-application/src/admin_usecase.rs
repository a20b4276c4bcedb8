//! The authenticated-editing workflow.
//!
//! `AdminUseCase` is the complete contract a rendering adapter talks
//! to: session transitions, policy-gated record mutations, the per-row
//! edit state machine, and re-projection after every change. The
//! renderer owns event wiring and drawing; nothing here touches a UI.

use folio_core::error::{FolioError, Result};
use folio_core::policy::AccessPolicy;
use folio_core::projection::{RowView, project};
use folio_core::session::{Session, SessionManager};
use folio_core::skill::{RecordStore, SkillRecord};
use folio_core::user::UserAccount;
use tracing::debug;

/// The row-editing state.
///
/// At most one edit session is open at a time. A repeat edit request
/// for the open row coalesces into it; a request for a different row
/// is rejected, so two open edits can never exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// No edit in progress
    Viewing,
    /// The row with this id is being edited
    Editing { id: u32 },
}

/// Orchestrates the admin workflow over the core components.
///
/// Control flow: UI event -> [`AccessPolicy`] check -> [`RecordStore`]
/// mutation (if allowed) -> re-projection. The [`SessionManager`] is
/// orthogonal, consulted by the policy and persisted on every
/// login/logout transition. All operations are synchronous; UI events
/// arrive serialized, so no two mutations are ever in flight at once.
pub struct AdminUseCase {
    records: RecordStore,
    sessions: SessionManager,
    accounts: Vec<UserAccount>,
    edit: EditState,
}

impl AdminUseCase {
    /// Creates the use case and restores any persisted session.
    ///
    /// Seed data must already be loaded (successfully or via fallback
    /// defaults) before this point.
    pub fn new(
        records: RecordStore,
        mut sessions: SessionManager,
        accounts: Vec<UserAccount>,
    ) -> Self {
        sessions.restore();
        Self {
            records,
            sessions,
            accounts,
            edit: EditState::Viewing,
        }
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        self.sessions.current()
    }

    /// The current edit state.
    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    /// Category suggestions for the edit form.
    pub fn categories(&self) -> &[String] {
        self.records.categories()
    }

    /// Projects the current store and session into render-ready rows.
    pub fn rows(&self) -> Vec<RowView> {
        project(self.records.list(), self.sessions.current())
    }

    /// Logs in against the account list.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Authentication` on bad credentials; the
    /// session is left unchanged.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Session> {
        self.sessions.login(username, password, &self.accounts)
    }

    /// Registers a new account and logs it in.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::DuplicateUser` if the username is taken.
    pub fn register(
        &mut self,
        display_name: &str,
        username: &str,
        password: &str,
    ) -> Result<Session> {
        self.sessions
            .register(display_name, username, password, &mut self.accounts)
    }

    /// Logs out, cancelling any open edit.
    ///
    /// An anonymous session cannot hold an edit, so the state machine
    /// returns to `Viewing` before the transition is persisted.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Storage` if the persisted session cannot
    /// be removed.
    pub fn logout(&mut self) -> Result<Session> {
        self.edit = EditState::Viewing;
        self.sessions.logout()
    }

    /// Adds a skill and returns the re-projected rows.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Permission` for an anonymous session
    /// (before the store is touched), or `FolioError::Validation` for
    /// bad field values.
    pub fn add_skill(
        &mut self,
        category: &str,
        skill_name: &str,
        level: u8,
    ) -> Result<Vec<RowView>> {
        AccessPolicy::ensure_can_mutate(self.sessions.current())?;
        let record = self.records.add(category, skill_name, level)?;
        debug!(id = record.id, "skill added");
        Ok(self.rows())
    }

    /// Deletes a skill and returns the re-projected rows.
    ///
    /// Deleting the row currently under edit clears the edit state.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Permission` for an anonymous session or
    /// `FolioError::NotFound` for an unknown id.
    pub fn delete_skill(&mut self, id: u32) -> Result<Vec<RowView>> {
        AccessPolicy::ensure_can_mutate(self.sessions.current())?;
        self.records.remove(id)?;
        if self.edit == (EditState::Editing { id }) {
            self.edit = EditState::Viewing;
        }
        debug!(id, "skill deleted");
        Ok(self.rows())
    }

    /// Opens an edit session on a row and returns its current values.
    ///
    /// A repeat request for the row already under edit coalesces into
    /// the existing edit session and returns the same snapshot.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Permission` for an anonymous session,
    /// `FolioError::NotFound` for an unknown id, or
    /// `FolioError::Conflict` if a different row is already being
    /// edited.
    pub fn begin_edit(&mut self, id: u32) -> Result<SkillRecord> {
        AccessPolicy::ensure_can_mutate(self.sessions.current())?;
        match self.edit {
            EditState::Editing { id: open } if open != id => {
                return Err(FolioError::conflict(format!(
                    "row {open} is already being edited"
                )));
            }
            _ => {}
        }

        let record = self
            .records
            .get(id)
            .cloned()
            .ok_or_else(|| FolioError::not_found("skill", id))?;
        self.edit = EditState::Editing { id };
        Ok(record)
    }

    /// Saves the open edit and returns the re-projected rows.
    ///
    /// On success the state machine returns to `Viewing`. A validation
    /// failure keeps the edit open so the form can be corrected.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Permission` for an anonymous session,
    /// `FolioError::Conflict` if no edit is in progress, or
    /// `FolioError::Validation` for bad field values.
    pub fn save_edit(
        &mut self,
        category: &str,
        skill_name: &str,
        level: u8,
    ) -> Result<Vec<RowView>> {
        AccessPolicy::ensure_can_mutate(self.sessions.current())?;
        let EditState::Editing { id } = self.edit else {
            return Err(FolioError::conflict("no edit in progress"));
        };

        self.records.update(id, category, skill_name, level)?;
        self.edit = EditState::Viewing;
        debug!(id, "edit saved");
        Ok(self.rows())
    }

    /// Cancels any open edit without mutating the store and returns
    /// the re-projected rows. Idempotent.
    pub fn cancel_edit(&mut self) -> Vec<RowView> {
        self.edit = EditState::Viewing;
        self.rows()
    }
}
