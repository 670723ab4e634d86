//! Anonymous session identity: the opaque cookie token and the request guard.

pub(crate) mod cookie;
mod guard;

pub use guard::session_guard;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The opaque token that groups transactions into an anonymous session.
///
/// A token is minted on the first write a client makes without one and is
/// treated as an opaque string everywhere else: possession of the token is the
/// only form of authentication, and every query is scoped to exactly one
/// token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Mint a fresh, globally-unique session token.
    pub(crate) fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod session_id_tests {
    use super::SessionId;

    #[test]
    fn minted_tokens_are_unique() {
        let first = SessionId::mint();
        let second = SessionId::mint();

        assert_ne!(first, second);
    }
}
