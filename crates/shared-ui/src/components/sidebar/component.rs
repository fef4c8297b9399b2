use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMenu;
use dioxus_free_icons::Icon;

// ─── Context ───────────────────────────────────────────────────────────

/// Whether the navigation drawer is expanded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

/// Owns the open/closed state shared by the sidebar and its trigger.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout ────────────────────────────────────────────────────────────

/// The drawer itself. On narrow screens an open drawer sits over a
/// backdrop that closes it when tapped.
#[component]
pub fn Sidebar(children: Element) -> Element {
    let mut state = use_sidebar();
    let is_open = state().open;

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            class: "sidebar",
            "data-state": if is_open { "open" } else { "closed" },
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

// ─── Menu ──────────────────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

/// One navigation entry. Selecting it closes the drawer on narrow screens
/// before running `onclick`.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    rsx! {
        li { class: "sidebar-menu-item",
            button {
                class: "sidebar-menu-button",
                r#type: "button",
                "data-active": if active { "true" } else { "false" },
                "aria-current": if active { "page" } else { "false" },
                onclick: move |evt| {
                    state.set(SidebarState { open: false });
                    onclick.call(evt);
                },
                {children}
            }
        }
    }
}

// ─── Utility ───────────────────────────────────────────────────────────

/// Hamburger button that toggles the drawer.
#[component]
pub fn SidebarTrigger() -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle navigation",
            onclick: move |_| {
                let current = state().open;
                state.set(SidebarState { open: !current });
            },
            Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
        }
    }
}

/// Main column next to the drawer.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-inset", {children} }
    }
}
