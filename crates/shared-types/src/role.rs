use serde::{Deserialize, Serialize};
use std::fmt;

/// Who the current visitor is, as far as navigation and dashboards care.
///
/// `Guest` only ever comes from an unauthenticated session; the API itself
/// knows `regular`, `admin` and `club`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    Regular,
    Admin,
    Club,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[Role::Guest, Role::Regular, Role::Admin, Role::Club];

impl Role {
    /// Parse the `role` field of an authenticated API response.
    ///
    /// Unknown values map to `Regular`.
    pub fn from_api(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "club" => Role::Club,
            _ => Role::Regular,
        }
    }

    /// Lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Regular => "regular",
            Role::Admin => "admin",
            Role::Club => "club",
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Role::Guest)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
