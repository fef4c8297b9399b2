use super::PageIntro;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdCar, LdMapPin, LdShield};
use dioxus_free_icons::Icon;
use shared_ui::{StatCard, StatGrid, StatTone};

#[component]
pub fn PrivateDashboard() -> Element {
    rsx! {
        PageIntro {
            title: "Private Dashboard",
            subtitle: "Track your personal vehicle information",
        }
        StatGrid {
            StatCard {
                label: "My Vehicles",
                value: "3",
                tone: StatTone::Blue,
                icon: rsx! { Icon::<LdCar> { icon: LdCar, width: 22, height: 22 } },
            }
            StatCard {
                label: "Recent Trips",
                value: "24",
                tone: StatTone::Green,
                icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 22, height: 22 } },
            }
            StatCard {
                label: "Miles Traveled",
                value: "1,245",
                tone: StatTone::Purple,
                icon: rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 22, height: 22 } },
            }
            StatCard {
                label: "Safety Score",
                value: "98%",
                tone: StatTone::Amber,
                icon: rsx! { Icon::<LdShield> { icon: LdShield, width: 22, height: 22 } },
            }
        }
    }
}
