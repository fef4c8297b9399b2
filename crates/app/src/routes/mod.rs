pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod settings;
pub mod unauthorized;

use crate::actions::use_layout_actions_provider;
use crate::auth::use_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCar, LdFileText, LdLayoutDashboard, LdLogOut, LdPlus, LdSettings, LdTicket, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    check_access, check_guest, compose_menu, dashboard_title, header_actions, role_display_name,
    GuardDecision, MenuIcon, Role,
};
use shared_ui::{
    Button, ButtonVariant, Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset,
    SidebarMenu, SidebarMenuButton, SidebarProvider, SidebarTrigger,
};

use dashboard::{
    AdminDashboard, CommercialDashboard, DashboardHome, PrivateDashboard, TicketerDashboard,
};
use login::Login;
use not_found::NotFound;
use settings::Settings;
use unauthorized::Unauthorized;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[layout(GuestGuard)]
        #[route("/auth/login")]
        Login {},
    #[end_layout]
    #[route("/unauthorized")]
    Unauthorized {},
    #[nest("/dashboard")]
        #[layout(AuthGuard)]
        #[layout(DashboardLayout)]
            #[route("/")]
            DashboardHome {},
            #[route("/admin")]
            AdminDashboard {},
            #[route("/ticketer")]
            TicketerDashboard {},
            #[route("/commercial")]
            CommercialDashboard {},
            #[route("/private")]
            PrivateDashboard {},
            #[route("/settings")]
            Settings {},
        #[end_layout]
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Roles allowed to open this route. Empty means any authenticated
    /// user for routes under the auth guard, and everyone elsewhere.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Route::AdminDashboard {} => &[Role::Admin],
            Route::TicketerDashboard {} => &[Role::Ticketer],
            Route::CommercialDashboard {} => &[Role::Commercial],
            Route::PrivateDashboard {} => &[Role::Private],
            Route::DashboardHome {}
            | Route::Settings {}
            | Route::Login {}
            | Route::Unauthorized {}
            | Route::NotFound { .. } => &[],
        }
    }
}

/// Landing route for `role` after login and from the `/dashboard` index.
pub fn dashboard_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard {},
        Role::Ticketer => Route::TicketerDashboard {},
        Role::Commercial => Route::CommercialDashboard {},
        Role::Private => Route::PrivateDashboard {},
        Role::Unknown => Route::DashboardHome {},
    }
}

/// Where a guard decision sends the user, if anywhere.
pub fn redirect_route(decision: GuardDecision) -> Option<Route> {
    match decision {
        GuardDecision::Permit => None,
        GuardDecision::RedirectLogin => Some(Route::Login {}),
        GuardDecision::RedirectUnauthorized => Some(Route::Unauthorized {}),
    }
}

/// Resolve a menu path. Paths without a page land on the catch-all.
fn route_for_path(path: &str) -> Route {
    path.parse().unwrap_or(Route::Login {})
}

/// Replace the current history entry with `to` and show a placeholder
/// until the router swaps the page.
pub(crate) fn redirect(to: Route) -> Element {
    tracing::debug!(to = %to, "redirecting");
    navigator().replace(to);
    rsx! {
        div { class: "redirect-notice", "Redirecting..." }
    }
}

/// Keeps signed-in users off the login page.
#[component]
fn GuestGuard() -> Element {
    let auth = use_auth();
    let session = auth.session();

    if check_guest(&session).is_some() {
        let role = session.role().unwrap_or(Role::Unknown);
        return redirect(dashboard_route(role));
    }
    rsx! { Outlet::<Route> {} }
}

/// Auth guard layout. Re-evaluated on every navigation and whenever the
/// session changes, so logging out anywhere bounces to the login page.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let session = auth.session();

    let decision = check_access(&session, route.allowed_roles());
    match redirect_route(decision) {
        None => rsx! { Outlet::<Route> {} },
        Some(target) => {
            tracing::info!(path = %route, ?decision, "navigation blocked");
            redirect(target)
        }
    }
}

fn menu_icon(icon: MenuIcon) -> Element {
    match icon {
        MenuIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        MenuIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        MenuIcon::Vehicles => rsx! { Icon::<LdCar> { icon: LdCar, width: 18, height: 18 } },
        MenuIcon::Reports => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        MenuIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        MenuIcon::Tickets => rsx! { Icon::<LdTicket> { icon: LdTicket, width: 18, height: 18 } },
    }
}

/// Dashboard chrome: role menu, title bar with header actions, user card.
#[component]
fn DashboardLayout() -> Element {
    let mut auth = use_auth();
    let route: Route = use_route();
    let mut actions = use_layout_actions_provider();

    let Some(user) = auth.user() else {
        return redirect(Route::Login {});
    };
    let role = user.role();
    let title = dashboard_title(&user.role.name);
    let role_label = role_display_name(&user.role.name);
    let initial = user.initial();
    let menu = compose_menu(role);
    let header = header_actions(role);
    let current_path = route.to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        Icon::<LdTicket> { icon: LdTicket, width: 22, height: 22 }
                        span { class: "sidebar-brand-name", "Kronotrack" }
                    }
                }

                SidebarContent {
                    SidebarMenu {
                        for item in menu {
                            SidebarMenuButton {
                                key: "{item.path}",
                                active: current_path == item.path,
                                onclick: move |_| {
                                    navigator().push(route_for_path(item.path));
                                },
                                {menu_icon(item.icon)}
                                span { "{item.label}" }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "user-card",
                        div { class: "user-card-avatar", "{initial}" }
                        div { class: "user-card-text",
                            p { class: "user-card-name", "{user.full_name}" }
                            p { class: "user-card-role", "{role_label}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "logout-button",
                        onclick: move |_| {
                            auth.logout();
                            navigator().replace(Route::Login {});
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Logout"
                    }
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger {}
                    h1 { class: "topbar-title", "{title}" }
                    div { class: "topbar-spacer" }
                    for action in header {
                        Button {
                            key: "{action.label()}",
                            onclick: move |_| actions.dispatch(action),
                            Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                            "{action.label()}"
                        }
                    }
                }

                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
