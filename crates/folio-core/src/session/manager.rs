//! Session lifecycle management.

use super::model::Session;
use super::repository::{SESSION_KEY, SessionStore};
use crate::error::{FolioError, Result};
use crate::user::UserAccount;
use tracing::{debug, warn};

/// Owns the process-wide [`Session`] and its persistence.
///
/// `SessionManager` is responsible for:
/// - Restoring the persisted session on startup
/// - Authenticating against an account list on login/register
/// - Persisting every login/logout transition through a [`SessionStore`]
///
/// The account list itself is owned by the caller (it is seeded by an
/// external collaborator); the manager only reads it to authenticate
/// and appends to it on registration.
pub struct SessionManager {
    session: Session,
    store: Box<dyn SessionStore>,
}

impl SessionManager {
    /// Creates a manager starting from the anonymous session.
    ///
    /// Call [`restore`](Self::restore) afterwards to pick up a
    /// previously persisted session.
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self {
            session: Session::anonymous(),
            store,
        }
    }

    /// Returns the current session.
    pub fn current(&self) -> &Session {
        &self.session
    }

    /// Restores the persisted session, if any.
    ///
    /// Absent or malformed stored data yields the anonymous session;
    /// malformed data is logged and treated as absent rather than
    /// surfaced to the caller (fail-safe default: logged out).
    pub fn restore(&mut self) -> &Session {
        self.session = match self.store.get(SESSION_KEY) {
            Some(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => {
                    debug!(logged_in = session.logged_in, "session restored");
                    session
                }
                Err(err) => {
                    warn!(%err, "persisted session is malformed, starting anonymous");
                    Session::anonymous()
                }
            },
            None => Session::anonymous(),
        };
        &self.session
    }

    /// Authenticates against `accounts` and persists the new session.
    ///
    /// The matched account is snapshot-copied into the session. On
    /// failure the current session is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Authentication` if no account matches the
    /// exact `(username, password)` pair, or `FolioError::Storage` if
    /// the session cannot be persisted.
    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        accounts: &[UserAccount],
    ) -> Result<Session> {
        let account = accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
            .ok_or_else(|| FolioError::authentication("invalid username or password"))?;

        let session = Session::authenticated(account.clone());
        self.store
            .set(SESSION_KEY, &serde_json::to_string(&session)?)?;
        debug!(username, "login succeeded");
        self.session = session.clone();
        Ok(session)
    }

    /// Registers a new account, appends it to `accounts`, then logs in.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::DuplicateUser` if `username` is already
    /// taken (case-sensitive exact match); no account is appended in
    /// that case. Otherwise fails like [`login`](Self::login).
    pub fn register(
        &mut self,
        display_name: &str,
        username: &str,
        password: &str,
        accounts: &mut Vec<UserAccount>,
    ) -> Result<Session> {
        if accounts.iter().any(|a| a.username == username) {
            return Err(FolioError::duplicate_user(username));
        }

        accounts.push(UserAccount {
            username: username.to_string(),
            password: password.to_string(),
            display_name: display_name.to_string(),
        });
        debug!(username, "account registered");
        self.login(username, password, accounts)
    }

    /// Clears to the anonymous session and removes the persisted entry.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Storage` if the persisted entry cannot be
    /// removed.
    pub fn logout(&mut self) -> Result<Session> {
        self.store.remove(SESSION_KEY)?;
        debug!("logged out");
        self.session = Session::anonymous();
        Ok(self.session.clone())
    }
}
