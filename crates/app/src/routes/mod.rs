pub mod home;
pub mod login;
pub mod nav;
pub mod not_found;
pub mod pages;
pub mod register;
pub mod users;

use crate::session::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMenu;
use dioxus_free_icons::Icon;
use shared_types::IdentityOutcome;
use shared_ui::{
    Separator, Sheet, Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset, SidebarTrigger,
};

use home::Home;
use login::Login;
use nav::{LogoutButton, NavMenu};
use not_found::NotFound;
use pages::{Club, Clubs, Dashboard, Events, Settings};
use register::Register;
use users::Users;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/users")]
        Users {},
        #[route("/clubs")]
        Clubs {},
        #[route("/club")]
        Club {},
        #[route("/events")]
        Events {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Dashboard shell: checks the session, then renders the role's navigation
/// next to the page.
///
/// The identity check is a server future, so during SSR it runs with the
/// browser's cookies and its result is embedded for hydration. Any outcome
/// other than `Authenticated` sends the visitor to `/`.
#[component]
fn DashboardLayout() -> Element {
    let mut session = use_session();
    let route: Route = use_route();
    let current_path = route.to_string();
    let mut mobile_open = use_signal(|| false);

    let identity =
        use_server_future(move || async move { server::api::get_current_user().await })?;

    use_effect(move || {
        let outcome = match identity.read().as_ref() {
            Some(Ok(outcome)) => outcome.clone(),
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Identity check failed");
                IdentityOutcome::Unreachable
            }
            None => return,
        };
        if session.apply_identity(&outcome) {
            navigator().push(Route::Home {});
        }
    });

    let outcome = identity.read().as_ref().cloned();
    let Some(Ok(IdentityOutcome::Authenticated(_))) = outcome else {
        return rsx! {
            div { class: "page-loading",
                p { "Redirecting..." }
            }
        };
    };

    let heading = session.sidebar_heading();
    let routes = session.nav_routes();
    let signed_in = session.is_authenticated();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "dashboard-shell",
            Sidebar {
                SidebarHeader { "{heading}" }
                SidebarContent {
                    if signed_in {
                        NavMenu { routes, current_path: current_path.clone() }
                    }
                }
                Separator {}
                SidebarFooter {
                    LogoutButton {}
                }
            }

            div { class: "dashboard-main",
                header { class: "dashboard-topbar",
                    SidebarTrigger { on_open: move |_| mobile_open.set(true),
                        span { class: "dashboard-trigger-icon",
                            Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                        }
                    }
                    span { class: "dashboard-topbar-title", "{heading}" }
                }
                SidebarInset {
                    Outlet::<Route> {}
                }
            }

            Sheet {
                open: mobile_open(),
                on_close: move |_| mobile_open.set(false),
                title: heading.clone(),
                if signed_in {
                    NavMenu {
                        routes,
                        current_path,
                        on_navigate: move |_| mobile_open.set(false),
                    }
                }
                div { class: "dashboard-sheet-footer",
                    LogoutButton {}
                }
            }
        }
    }
}
