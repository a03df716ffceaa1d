//! Tenant user and profile models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityId;

/// An authenticated portal user, as returned by the verify endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    /// Role name as assigned by the backend (e.g. `"TENANT"`). Kept opaque so
    /// new roles do not break deserialization of the login response.
    pub role: String,
}

/// The tenant's editable profile, read from `GET /tenant/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantProfile {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub unit_number: Option<String>,
}

/// Payload for `PUT /tenant/profile`. Only the fields a tenant may edit.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,
    #[validate(length(max = 32, message = "Phone number must be at most 32 characters"))]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn update_profile_accepts_valid_input() {
        let input = UpdateProfile {
            name: "Jamie Rivera".to_string(),
            phone: Some("+1 555 0100".to_string()),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn update_profile_rejects_empty_name() {
        let input = UpdateProfile {
            name: String::new(),
            phone: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn user_round_trips_camel_case() {
        let json = r#"{"id":"u_1","name":"Jamie","email":"jamie@example.com","role":"TENANT"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, "TENANT");
    }
}
