use dioxus::prelude::*;
use shared_types::{routes_for_session, IdentityOutcome, NavRoute, Role, Session};

/// Client-side session context.
///
/// Written only by the identity check in the dashboard layout and by the
/// login and logout actions; everything else reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub session: Signal<Session>,
    /// Sidebar heading: club name, or the role in upper case.
    pub heading: Signal<Option<String>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::guest()),
            heading: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated
    }

    pub fn nav_routes(&self) -> &'static [NavRoute] {
        routes_for_session(&self.session.read())
    }

    pub fn log_in(&mut self, role: Role) {
        self.session.set(Session::authenticated(role));
    }

    /// Mark the session authenticated before the role is known.
    pub fn mark_authenticated(&mut self) {
        let role = match self.session.read().role {
            Role::Guest => Role::Regular,
            role => role,
        };
        self.log_in(role);
    }

    /// Title for the dashboard sidebar and sheet.
    pub fn sidebar_heading(&self) -> String {
        if let Some(heading) = self.heading.read().clone() {
            return heading;
        }
        let session = self.session.read();
        if session.is_authenticated {
            session.role.as_str().to_uppercase()
        } else {
            "Redirecting...".to_string()
        }
    }

    pub fn log_out(&mut self) {
        self.session.set(Session::guest());
        self.heading.set(None);
    }

    /// Apply an identity check. Returns `true` when the caller should be sent home.
    pub fn apply_identity(&mut self, outcome: &IdentityOutcome) -> bool {
        let next = Session::resolve(outcome);
        if *self.session.peek() != next {
            self.session.set(next);
        }
        let heading = outcome.heading();
        if *self.heading.peek() != heading {
            self.heading.set(heading);
        }
        outcome.requires_redirect()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the session context provided by `App`.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
