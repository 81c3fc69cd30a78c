//! Account records beyond the credential itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockdeck_core::EntityId;

use crate::role::Role;

/// Profile as served by `GET /auth/profile/` and accepted by the PUT.
///
/// The username is read-only in the UI but travels with the payload, which
/// the backend tolerates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Profile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Row of the admin-only user directory (`GET /users/`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: EntityId,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    pub date_joined: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_account_parses_directory_row() {
        let raw = r#"{
            "id": 3,
            "username": "carol",
            "email": "carol@example.com",
            "role": "Staff",
            "date_joined": "2024-11-02T09:30:00Z"
        }"#;

        let account: UserAccount = serde_json::from_str(raw).unwrap();
        assert_eq!(account.id, EntityId::new(3));
        assert_eq!(account.role, Role::Staff);
    }

    #[test]
    fn profile_tolerates_missing_optional_fields() {
        let profile: Profile = serde_json::from_str(r#"{"username": "dave"}"#).unwrap();
        assert_eq!(profile.username, "dave");
        assert_eq!(profile.first_name, "");
    }
}
