//! Authenticated session state

use crate::types::User;
use std::sync::Arc;

/// Token and identity produced by one successful login.
///
/// Never mutated: a fresh login builds a new `Session` and swaps it in whole,
/// so readers see either the old pair or the new pair.
#[derive(Clone)]
pub struct Session {
    token: String,
    user: Arc<User>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: Arc<User>) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// Value for the `Authorization` header
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &Arc<User> {
        &self.user
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("golfer_id", &self.user.golfer_id)
            .finish()
    }
}
