use crate::routes::Route;
use crate::session::{use_session, SessionState};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdBriefcase, LdCalendar, LdLayoutDashboard, LdLockOpen, LdSettings, LdShield,
    LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{is_active, NavIcon, NavRoute};
use shared_ui::{use_toast, Button, ButtonVariant, SidebarMenu, SidebarMenuItem, ToastOptions};

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Home => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        NavIcon::Dashboard => {
            rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } }
        }
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Clubs => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
        NavIcon::Club => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        NavIcon::Events => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        NavIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}

/// Ordered list of navigation links with the current page highlighted.
#[component]
pub fn NavMenu(
    routes: &'static [NavRoute],
    current_path: String,
    #[props(default)] on_navigate: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        SidebarMenu {
            for nav in routes.iter() {
                SidebarMenuItem { key: "{nav.path}", active: is_active(&current_path, nav),
                    Link {
                        class: "nav-link",
                        to: nav.path,
                        onclick: move |_| {
                            if let Some(handler) = &on_navigate {
                                handler.call(());
                            }
                        },
                        {nav_icon(nav.icon)}
                        span { "{nav.label}" }
                    }
                }
            }
        }
    }
}

/// Local half of logout. The session is cleared and the visitor sent home
/// whatever the server function returned.
pub fn finish_logout(session: &mut SessionState, result: Result<(), ServerFnError>) -> Route {
    if let Err(e) = result {
        tracing::warn!(error = %e, "Logout request failed");
    }
    session.log_out();
    Route::Home {}
}

/// Ends the session. The upstream call is best effort: local state is
/// cleared and the visitor sent home whatever it returns.
#[component]
pub fn LogoutButton() -> Element {
    let mut session = use_session();
    let toast = use_toast();
    let mut pending = use_signal(|| false);

    let handle_logout = move |_: MouseEvent| async move {
        pending.set(true);
        let target = finish_logout(&mut session, server::api::logout().await);
        toast.success("Logged out".to_string(), ToastOptions::new());
        pending.set(false);
        navigator().push(target);
    };

    rsx! {
        Button {
            class: "logout-button",
            variant: ButtonVariant::Ghost,
            disabled: pending(),
            onclick: handle_logout,
            Icon::<LdLockOpen> { icon: LdLockOpen, width: 18, height: 18 }
            "Logout"
        }
    }
}
