//! Login policy for accounts without a stored password hash.

use serde::Deserialize;

/// How a login attempt is treated when the account has no password hash.
///
/// Accounts created without a password have no usable credential. `Allow`
/// lets such logins through with any password; `Deny` rejects them like a
/// wrong password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingHashPolicy {
    Allow,
    #[default]
    Deny,
}

impl MissingHashPolicy {
    pub fn allows_login(self) -> bool {
        matches!(self, Self::Allow)
    }
}
