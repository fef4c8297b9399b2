use crate::role::{role_display_name, Role, SETTINGS_PATH};

/// Icon shown next to a navigation entry. The UI maps each variant to a
/// concrete glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Dashboard,
    Users,
    Vehicles,
    Reports,
    Settings,
    Tickets,
}

/// One sidebar navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub icon: MenuIcon,
    pub label: &'static str,
    pub path: &'static str,
}

impl MenuItem {
    pub const fn new(icon: MenuIcon, label: &'static str, path: &'static str) -> Self {
        Self { icon, label, path }
    }
}

/// Header action a role may trigger from the layout chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    CreateTicket,
}

impl HeaderAction {
    pub fn label(&self) -> &'static str {
        match self {
            HeaderAction::CreateTicket => "Create Ticket",
        }
    }
}

/// Entries every role sees, in order. The first entry points at the
/// role's own dashboard.
pub fn base_menu(role: Role) -> Vec<MenuItem> {
    vec![
        MenuItem::new(MenuIcon::Dashboard, "Dashboard", role.default_dashboard()),
        MenuItem::new(MenuIcon::Users, "Users", "/dashboard/users"),
        MenuItem::new(MenuIcon::Vehicles, "Vehicles", "/dashboard/vehicles"),
        MenuItem::new(MenuIcon::Reports, "Reports", "/dashboard/reports"),
        MenuItem::new(MenuIcon::Settings, "Settings", SETTINGS_PATH),
    ]
}

/// Extra entries contributed by a role, appended after the base sequence.
fn role_extensions(role: Role) -> Vec<MenuItem> {
    match role {
        Role::Admin | Role::Ticketer | Role::Commercial | Role::Private | Role::Unknown => {
            Vec::new()
        }
    }
}

/// Sidebar menu for `role`: the base sequence followed by its extensions.
pub fn compose_menu(role: Role) -> Vec<MenuItem> {
    compose_menu_with(role, role_extensions)
}

/// Like [`compose_menu`] with a caller-supplied extension source.
pub fn compose_menu_with(role: Role, extensions: impl Fn(Role) -> Vec<MenuItem>) -> Vec<MenuItem> {
    let mut menu = base_menu(role);
    menu.extend(extensions(role));
    menu
}

/// Header actions available to `role`.
pub fn header_actions(role: Role) -> Vec<HeaderAction> {
    let mut actions = Vec::new();
    if role.can_create_tickets() {
        actions.push(HeaderAction::CreateTicket);
    }
    actions
}

/// Page title for the layout header: "Ticketer Dashboard".
pub fn dashboard_title(role_name: &str) -> String {
    let name = role_display_name(role_name);
    if name.is_empty() {
        "Dashboard".to_string()
    } else {
        format!("{name} Dashboard")
    }
}
