use crate::routes::Route;
use crate::session::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMenu, LdX};
use dioxus_free_icons::Icon;
use shared_types::{is_active, routes_for, Role};

/// Public landing page.
#[component]
pub fn Home() -> Element {
    let session = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        PublicHeader {}

        main { class: "home-hero",
            h1 { class: "home-title", "Competition Portal" }
            p { class: "home-tagline",
                "Discover university clubs, join events and manage competitions in one place."
            }
            div { class: "home-actions",
                if session.is_authenticated() {
                    Link { class: "home-cta primary", to: Route::Dashboard {}, "Go to dashboard" }
                } else {
                    Link { class: "home-cta primary", to: Route::Login {}, "Login" }
                    Link { class: "home-cta", to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}

/// Site header with the guest links, collapsing into a toggle menu on
/// narrow screens.
#[component]
pub fn PublicHeader() -> Element {
    let route: Route = use_route();
    let current_path = route.to_string();
    let mut menu_open = use_signal(|| false);
    let links = routes_for(Role::Guest);

    rsx! {
        nav { class: "public-header", "data-menu-open": if menu_open() { "true" } else { "false" },
            div { class: "public-header-bar",
                Link { class: "public-brand", to: Route::Home {}, "Competition Portal" }

                div { class: "public-links",
                    for nav in links.iter() {
                        Link {
                            key: "{nav.path}",
                            class: if is_active(&current_path, nav) { "public-link active" } else { "public-link" },
                            to: nav.path,
                            "{nav.label}"
                        }
                    }
                }

                button {
                    class: "public-menu-toggle",
                    r#type: "button",
                    "aria-label": "Toggle Menu",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() {
                        Icon::<LdX> { icon: LdX, width: 20, height: 20 }
                    } else {
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                }
            }

            if menu_open() {
                div { class: "public-mobile-links",
                    for nav in links.iter() {
                        Link {
                            key: "{nav.path}",
                            class: if is_active(&current_path, nav) { "public-link active" } else { "public-link" },
                            to: nav.path,
                            onclick: move |_| menu_open.set(false),
                            "{nav.label}"
                        }
                    }
                }
            }
        }
    }
}
