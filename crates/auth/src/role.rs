//! Roles granted by the backend.

use serde::{Deserialize, Serialize};

/// Role attached to the session by the login/register response.
///
/// The backend is authoritative: registration may ask for `Admin` and be
/// granted `User` when the admin key check fails. Anything the client does
/// not recognize degrades to `User` rather than failing the login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    #[default]
    User,
    Staff,
    Admin,
}

impl Role {
    /// Lenient parse used on persisted/returned role strings.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw {
            "Admin" => Role::Admin,
            "Staff" => Role::Staff,
            _ => Role::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Staff => "Staff",
            Role::Admin => "Admin",
        }
    }

    /// Products can be managed by staff and admins.
    pub fn can_manage_products(&self) -> bool {
        matches!(self, Role::Staff | Role::Admin)
    }

    /// Suppliers are admin-only.
    pub fn can_manage_suppliers(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// The user directory is admin-only (the backend enforces this with 403;
    /// the client simply does not offer the view to others).
    pub fn can_view_users(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
