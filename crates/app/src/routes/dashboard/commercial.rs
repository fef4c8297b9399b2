use super::PageIntro;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdDollarSign, LdMapPin, LdTruck};
use dioxus_free_icons::Icon;
use shared_ui::{StatCard, StatGrid, StatTone};

/// Fleet operator overview.
#[component]
pub fn CommercialDashboard() -> Element {
    rsx! {
        PageIntro {
            title: "Commercial Dashboard",
            subtitle: "Monitor your commercial operations",
        }
        StatGrid {
            StatCard {
                label: "Active Vehicles",
                value: "42",
                tone: StatTone::Blue,
                icon: rsx! { Icon::<LdTruck> { icon: LdTruck, width: 22, height: 22 } },
            }
            StatCard {
                label: "Routes Covered",
                value: "18",
                tone: StatTone::Green,
                icon: rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 22, height: 22 } },
            }
            StatCard {
                label: "Today's Revenue",
                value: "\u{20a6}45K",
                tone: StatTone::Purple,
                icon: rsx! { Icon::<LdDollarSign> { icon: LdDollarSign, width: 22, height: 22 } },
            }
            StatCard {
                label: "Active Trips",
                value: "12",
                tone: StatTone::Amber,
                icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 22, height: 22 } },
            }
        }
    }
}
