use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::Role;

/// A row of `/api/users/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(alias = "id")]
    pub uuid: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub university_id: Option<String>,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    pub fn role_kind(&self) -> Role {
        Role::from_api(&self.role)
    }
}

/// Sortable data columns of the user table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserColumn {
    Name,
    Email,
    UniversityId,
    Role,
}

pub const USER_COLUMNS: &[UserColumn] = &[
    UserColumn::Name,
    UserColumn::Email,
    UserColumn::UniversityId,
    UserColumn::Role,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: UserColumn,
    pub direction: SortDirection,
}

impl UserColumn {
    pub fn header(&self) -> &'static str {
        match self {
            UserColumn::Name => "Name",
            UserColumn::Email => "Email",
            UserColumn::UniversityId => "University ID",
            UserColumn::Role => "User Type",
        }
    }

    /// Cell text for this column.
    pub fn value<'a>(&self, user: &'a UserRecord) -> &'a str {
        match self {
            UserColumn::Name => &user.name,
            UserColumn::Email => &user.email,
            UserColumn::UniversityId => user.university_id.as_deref().unwrap_or(""),
            UserColumn::Role => &user.role,
        }
    }

    fn compare(&self, a: &UserRecord, b: &UserRecord) -> Ordering {
        self.value(a)
            .to_lowercase()
            .cmp(&self.value(b).to_lowercase())
    }
}

/// Advance the sort when a column header is clicked:
/// unsorted → ascending → descending → unsorted. Clicking a different column
/// starts it at ascending.
pub fn next_sort(current: Option<SortState>, clicked: UserColumn) -> Option<SortState> {
    match current {
        Some(SortState { column, direction }) if column == clicked => match direction {
            SortDirection::Ascending => Some(SortState {
                column,
                direction: SortDirection::Descending,
            }),
            SortDirection::Descending => None,
        },
        _ => Some(SortState {
            column: clicked,
            direction: SortDirection::Ascending,
        }),
    }
}

/// Stable, case-insensitive ordering of `users`. `None` keeps API order.
pub fn sorted_users(users: &[UserRecord], sort: Option<SortState>) -> Vec<UserRecord> {
    let mut rows = users.to_vec();
    if let Some(SortState { column, direction }) = sort {
        rows.sort_by(|a, b| {
            let ord = column.compare(a, b);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    rows
}
