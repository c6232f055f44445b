use dioxus::prelude::*;
use shared_ui::{Card, CardContent, PageHeader};

#[component]
fn Placeholder(title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "container",
            PageHeader { title, subtitle }
            Card {
                CardContent {
                    p { class: "placeholder-text", "Nothing here yet." }
                }
            }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Placeholder { title: "Dashboard", subtitle: "Your overview of clubs and events" }
    }
}

/// Clubs directory.
#[component]
pub fn Clubs() -> Element {
    rsx! {
        Placeholder { title: "Clubs", subtitle: "University clubs on the portal" }
    }
}

/// The signed-in club's own page.
#[component]
pub fn Club() -> Element {
    rsx! {
        Placeholder { title: "Club", subtitle: "Manage your club" }
    }
}

#[component]
pub fn Events() -> Element {
    rsx! {
        Placeholder { title: "Events", subtitle: "Upcoming competitions and events" }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        Placeholder { title: "Settings", subtitle: "Account preferences" }
    }
}
