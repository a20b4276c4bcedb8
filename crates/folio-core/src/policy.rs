//! Access policy for mutating operations.
//!
//! A single pure predicate decides, from session state alone, whether
//! record mutations are permitted. Every mutating path from a UI layer
//! is gated here; a denied attempt surfaces as a `Permission` error
//! with a user-facing message, never a silent no-op.

use crate::error::{FolioError, Result};
use crate::session::Session;

/// Pure policy deriving permitted operations from session state.
pub struct AccessPolicy;

impl AccessPolicy {
    /// Returns true iff `session` may mutate the record store.
    pub fn can_mutate(session: &Session) -> bool {
        session.logged_in
    }

    /// Converts a denied [`can_mutate`](Self::can_mutate) check into a
    /// `Permission` error.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Permission` when `session` is anonymous.
    pub fn ensure_can_mutate(session: &Session) -> Result<()> {
        if Self::can_mutate(session) {
            Ok(())
        } else {
            Err(FolioError::permission("log in to edit skills"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserAccount;

    #[test]
    fn test_anonymous_cannot_mutate() {
        let session = Session::anonymous();
        assert!(!AccessPolicy::can_mutate(&session));
        assert!(
            AccessPolicy::ensure_can_mutate(&session)
                .unwrap_err()
                .is_permission()
        );
    }

    #[test]
    fn test_authenticated_can_mutate() {
        let session = Session::authenticated(UserAccount {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            display_name: "Administrator".to_string(),
        });
        assert!(AccessPolicy::can_mutate(&session));
        assert!(AccessPolicy::ensure_can_mutate(&session).is_ok());
    }
}
