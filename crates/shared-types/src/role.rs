use serde::{Deserialize, Serialize};

/// Login view path.
pub const LOGIN_PATH: &str = "/auth/login";
/// Shown when an authenticated user lacks the role a route requires.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";
/// Generic dashboard root; the fallback for roles outside the known set.
pub const DASHBOARD_ROOT_PATH: &str = "/dashboard";
/// Settings page, reachable by every authenticated role.
pub const SETTINGS_PATH: &str = "/dashboard/settings";

/// Access level assigned to a user by the backend.
///
/// Parsed from the wire `role.name`. Anything outside the four known names
/// lands in [`Role::Unknown`], which every exhaustive match must handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Ticketer,
    Commercial,
    Private,
    Unknown,
}

/// All known roles in display order.
pub const ALL_ROLES: &[Role] = &[Role::Admin, Role::Ticketer, Role::Commercial, Role::Private];

impl Role {
    /// Parse from the backend role name. Unknown values map to `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "ticketer" => Role::Ticketer,
            "commercial" => Role::Commercial,
            "private" => Role::Private,
            _ => Role::Unknown,
        }
    }

    /// Wire name of a known role. `Unknown` has no wire name of its own.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Ticketer => "ticketer",
            Role::Commercial => "commercial",
            Role::Private => "private",
            Role::Unknown => "unknown",
        }
    }

    /// Landing path after login and the target of the `/dashboard` index.
    pub fn default_dashboard(&self) -> &'static str {
        match self {
            Role::Admin => "/dashboard/admin",
            Role::Ticketer => "/dashboard/ticketer",
            Role::Commercial => "/dashboard/commercial",
            Role::Private => "/dashboard/private",
            Role::Unknown => DASHBOARD_ROOT_PATH,
        }
    }

    /// Whether this role may open the create-ticket dialog from the header.
    pub fn can_create_tickets(&self) -> bool {
        matches!(self, Role::Ticketer)
    }
}

/// Role record embedded in a [`crate::User`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleInfo {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl RoleInfo {
    pub fn role(&self) -> Role {
        Role::from_name(&self.name)
    }
}

/// Capitalize the first letter of a role name ("ticketer" → "Ticketer").
pub fn role_display_name(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
