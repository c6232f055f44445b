use serde::{Deserialize, Serialize};

use crate::Role;

/// Club attached to a club account, as returned by `/api/user/me/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubSummary {
    pub name: String,
}

/// Body of a successful `/api/user/me/` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub role: String,
    #[serde(default)]
    pub club: Option<ClubSummary>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CurrentUser {
    pub fn role(&self) -> Role {
        Role::from_api(&self.role)
    }

    /// Sidebar heading: the club name for club accounts, otherwise the role
    /// in upper case.
    pub fn heading(&self) -> String {
        match &self.club {
            Some(club) if !club.name.is_empty() => club.name.clone(),
            _ => self.role.to_uppercase(),
        }
    }
}

/// What the identity endpoint said about the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IdentityOutcome {
    /// 2xx with a parseable body.
    Authenticated(CurrentUser),
    /// Any non-2xx answer.
    Rejected { status: u16 },
    /// No answer at all, or an answer we could not read.
    Unreachable,
}

impl IdentityOutcome {
    /// Dashboard pages send the visitor home unless they are signed in.
    pub fn requires_redirect(&self) -> bool {
        !matches!(self, IdentityOutcome::Authenticated(_))
    }

    pub fn heading(&self) -> Option<String> {
        match self {
            IdentityOutcome::Authenticated(user) => Some(user.heading()),
            _ => None,
        }
    }
}

/// Client-side view of the server-managed session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub is_authenticated: bool,
    pub role: Role,
}

impl Default for Session {
    fn default() -> Self {
        Self::guest()
    }
}

impl Session {
    pub fn guest() -> Self {
        Self {
            is_authenticated: false,
            role: Role::Guest,
        }
    }

    pub fn authenticated(role: Role) -> Self {
        Self {
            is_authenticated: true,
            role,
        }
    }

    /// The session that follows from an identity check.
    pub fn resolve(outcome: &IdentityOutcome) -> Self {
        match outcome {
            IdentityOutcome::Authenticated(user) => Self::authenticated(user.role()),
            IdentityOutcome::Rejected { .. } | IdentityOutcome::Unreachable => Self::guest(),
        }
    }

    /// Role used for navigation; unauthenticated sessions always navigate as guests.
    pub fn nav_role(&self) -> Role {
        if self.is_authenticated {
            self.role
        } else {
            Role::Guest
        }
    }
}

/// Result of posting credentials to the token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginOutcome {
    Accepted,
    Rejected { status: u16 },
}

/// Toast shown when the login call never got an answer.
pub const LOGIN_NETWORK_ERROR: &str = "Network error, please try again.";

impl LoginOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, LoginOutcome::Accepted)
    }

    pub fn toast_message(&self) -> String {
        match self {
            LoginOutcome::Accepted => "Login Successful".to_string(),
            LoginOutcome::Rejected { status } => format!("Login Failed (Status {status})"),
        }
    }
}
