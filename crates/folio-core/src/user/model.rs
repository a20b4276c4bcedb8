//! User account domain model.

use serde::{Deserialize, Serialize};

/// An account in the mock admin user list.
///
/// Passwords are stored in plaintext: this is a client-side mock
/// workflow with no real authentication, and the insecurity is a
/// documented non-goal. Usernames are unique (case-sensitive) within
/// an account list. Accounts are created by registration and never
/// mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Unique login name
    pub username: String,
    /// Plaintext password (insecure by design)
    pub password: String,
    /// Name shown in the UI once logged in
    pub display_name: String,
}
