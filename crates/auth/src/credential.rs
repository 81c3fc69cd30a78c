//! The bearer credential.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Everything the client knows about the signed-in user.
///
/// Lives only while a token does; username and role are meaningless without
/// one, so there is no way to build a `Credential` with an empty token short
/// of deserializing one — and the session store refuses those on restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    token: String,
    username: String,
    role: Role,
}

impl Credential {
    pub fn new(token: impl Into<String>, username: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
            role,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Value for the `Authorization` header. The backend uses DRF-style
    /// token auth, so the scheme is `Token`, not `Bearer`.
    pub fn header_value(&self) -> String {
        format!("Token {}", self.token)
    }
}
