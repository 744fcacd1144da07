//! User model and auth payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `GET /auth/me`.
///
/// Identity itself lives in the server-side session cookie; the client
/// only ever holds this fetched snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const fn default_true() -> bool {
    true
}

/// Payload for `POST /auth/signup`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Partial update payload for `PATCH /auth/me`.
///
/// `None` fields are not serialized, so the server leaves them untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl ProfileUpdate {
    /// Whether this update would change anything at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.password.is_none() && self.phone_number.is_none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn user_deserializes_with_minimal_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "user_id": 1,
            "email": "diarist@example.com",
            "name": "Diarist",
            "created_at": "2025-06-01T10:00:00Z",
            "updated_at": "2025-06-09T14:30:00Z",
        }))
        .unwrap();
        assert_eq!(user.phone_number, None);
        assert!(user.is_active);
    }

    #[test]
    fn profile_update_omits_unset_fields() {
        let update = ProfileUpdate {
            name: Some("New Name".to_string()),
            ..ProfileUpdate::default()
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "New Name" }));
    }

    #[test]
    fn empty_profile_update_is_detected() {
        assert!(ProfileUpdate::default().is_empty());
    }
}
