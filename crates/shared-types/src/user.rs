use crate::role::{Role, RoleInfo};
use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the login endpoint.
///
/// Only `role` drives access decisions; the profile fields are shown on
/// the settings page and otherwise carried as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    #[serde(rename = "roleId", default)]
    pub role_id: i64,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub rfid_tag: Option<String>,
    #[serde(default)]
    pub registered_by: Option<i64>,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub role: RoleInfo,
}

impl User {
    pub fn role(&self) -> Role {
        self.role.role()
    }

    /// Single-letter avatar initial, "U" when the name is blank.
    pub fn initial(&self) -> String {
        self.full_name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}
