//! Session domain model.

use crate::user::UserAccount;
use serde::{Deserialize, Serialize};

/// Process-wide authentication state.
///
/// Exactly one logical session exists per browsing context. The
/// current user, when set, is a snapshot copy of the matched account
/// taken at login time, not a live reference into the account list:
/// later edits to the list do not reflect into an active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Whether the session is authenticated
    pub logged_in: bool,
    /// Snapshot of the logged-in account, `None` when anonymous
    pub current_user: Option<UserAccount>,
}

impl Session {
    /// The anonymous (logged-out) session.
    pub fn anonymous() -> Self {
        Self {
            logged_in: false,
            current_user: None,
        }
    }

    /// An authenticated session holding a snapshot of `account`.
    pub fn authenticated(account: UserAccount) -> Self {
        Self {
            logged_in: true,
            current_user: Some(account),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous() {
        let session = Session::anonymous();
        assert!(!session.logged_in);
        assert!(session.current_user.is_none());
    }

    #[test]
    fn test_authenticated_snapshot() {
        let account = UserAccount {
            username: "ann".to_string(),
            password: "pw1".to_string(),
            display_name: "Ann".to_string(),
        };
        let session = Session::authenticated(account.clone());
        assert!(session.logged_in);
        assert_eq!(session.current_user, Some(account));
    }
}
