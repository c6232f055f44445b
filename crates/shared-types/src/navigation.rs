use crate::{Role, Session};

/// Icon shown next to a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Dashboard,
    Users,
    Clubs,
    Club,
    Events,
    Settings,
}

/// One entry of a role's navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRoute {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

const fn route(path: &'static str, label: &'static str, icon: NavIcon) -> NavRoute {
    NavRoute { path, label, icon }
}

/// Public site header links.
pub const GUEST_ROUTES: &[NavRoute] = &[
    route("/", "Home", NavIcon::Home),
    route("/events", "Events", NavIcon::Events),
    route("/clubs", "Clubs", NavIcon::Clubs),
];

pub const REGULAR_ROUTES: &[NavRoute] = &[
    route("/dashboard", "Dashboard", NavIcon::Dashboard),
    route("/settings", "Settings", NavIcon::Settings),
];

pub const ADMIN_ROUTES: &[NavRoute] = &[
    route("/dashboard", "Dashboard", NavIcon::Dashboard),
    route("/users", "Users", NavIcon::Users),
    route("/clubs", "Clubs", NavIcon::Clubs),
    route("/settings", "Settings", NavIcon::Settings),
];

pub const CLUB_ROUTES: &[NavRoute] = &[
    route("/dashboard", "Dashboard", NavIcon::Dashboard),
    route("/club", "Club", NavIcon::Club),
    route("/events", "Events", NavIcon::Events),
    route("/settings", "Settings", NavIcon::Settings),
];

/// The ordered navigation list for `role`.
pub fn routes_for(role: Role) -> &'static [NavRoute] {
    match role {
        Role::Guest => GUEST_ROUTES,
        Role::Regular => REGULAR_ROUTES,
        Role::Admin => ADMIN_ROUTES,
        Role::Club => CLUB_ROUTES,
    }
}

/// The navigation list for a resolved session.
pub fn routes_for_session(session: &Session) -> &'static [NavRoute] {
    routes_for(session.nav_role())
}

/// Exact path match, no prefix or trailing-slash folding.
pub fn is_active(current_path: &str, route: &NavRoute) -> bool {
    current_path == route.path
}
