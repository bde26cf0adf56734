use crate::types::AccountId;
use std::fmt;

/// Credentials for account-scoped requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The account ID.
    pub account_id: AccountId,
    /// The account token.
    pub account_token: String,
}

impl Credentials {
    /// Creates new [`Credentials`].
    pub fn new<T>(account_id: AccountId, account_token: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            account_id,
            account_token: account_token.into(),
        }
    }
}

// The token is never printed.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("account_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let credentials = Credentials::new(42, "secret-token");
        let debug = format!("{credentials:?}");

        assert!(debug.contains("42"));
        assert!(!debug.contains("secret-token"));
    }
}
