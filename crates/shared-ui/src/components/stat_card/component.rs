use dioxus::prelude::*;

/// Accent colour of a stat card's icon chip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatTone {
    #[default]
    Purple,
    Green,
    Amber,
    Blue,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Purple => "purple",
            StatTone::Green => "green",
            StatTone::Amber => "amber",
            StatTone::Blue => "blue",
        }
    }
}

/// A single headline number with its label and icon.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] tone: StatTone,
    icon: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            div { class: "stat-card-icon", "data-tone": tone.class(), {icon} }
            div { class: "stat-card-body",
                p { class: "stat-card-label", "{label}" }
                p { class: "stat-card-value", "{value}" }
            }
        }
    }
}

/// Responsive grid for a row of stat cards.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}
