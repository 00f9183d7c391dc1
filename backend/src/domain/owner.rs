//! Anonymous owner identity.
//!
//! The owner token is the sole access-control credential: an opaque string
//! minted once per browser and carried back on every request in a cookie.
//! The server keeps no session table; possession of the token is ownership.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier scoping todos to one anonymous browser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerToken(String);

/// Validation failure raised when constructing an [`OwnerToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OwnerTokenValidationError {
    /// The supplied value was empty after trimming.
    #[error("owner token must not be empty")]
    Empty,
}

impl OwnerToken {
    /// Wrap an existing token, rejecting empty values.
    ///
    /// Cookie values arrive untrusted; anything non-empty is accepted as-is
    /// so identities minted by older deployments keep working.
    pub fn new(raw: impl Into<String>) -> Result<Self, OwnerTokenValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(OwnerTokenValidationError::Empty);
        }
        Ok(Self(raw))
    }

    /// Mint a fresh globally unique token.
    #[must_use]
    pub fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for OwnerToken {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for OwnerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn minted_tokens_are_unique() {
        assert_ne!(OwnerToken::mint(), OwnerToken::mint());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank_values(#[case] raw: &str) {
        assert_eq!(
            OwnerToken::new(raw),
            Err(OwnerTokenValidationError::Empty)
        );
    }

    #[test]
    fn preserves_existing_value_verbatim() {
        let token = OwnerToken::new("legacy-cookie-value").expect("non-empty token");
        assert_eq!(token.as_str(), "legacy-cookie-value");
    }
}
