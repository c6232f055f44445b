use dioxus::prelude::*;
use shared_types::{
    next_sort, sorted_users, AppError, Role, SortDirection, SortState, UserColumn, UserRecord,
    USER_COLUMNS,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, ColumnSort, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
    PageHeader, SkeletonRows,
};

/// Admin listing of every account.
#[component]
pub fn Users() -> Element {
    let data = use_resource(move || async move { server::api::list_users().await });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./users.css") }

        div { class: "container",
            PageHeader { title: "Users", subtitle: "Every account registered on the portal" }

            match &*data.read() {
                Some(Ok(users)) => rsx! {
                    UserTable { users: users.clone() }
                },
                Some(Err(e)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "users-error", role: "alert",
                                "{AppError::friendly_message(&e.to_string())}"
                            }
                        }
                    }
                },
                None => rsx! {
                    SkeletonRows { rows: 5 }
                },
            }
        }
    }
}

/// Header state for `column` given the table's current sort.
pub fn column_sort(sort: Option<SortState>, column: UserColumn) -> ColumnSort {
    match sort {
        Some(state) if state.column == column => match state.direction {
            SortDirection::Ascending => ColumnSort::Ascending,
            SortDirection::Descending => ColumnSort::Descending,
        },
        _ => ColumnSort::Unsorted,
    }
}

fn role_badge_variant(user: &UserRecord) -> BadgeVariant {
    match user.role_kind() {
        Role::Admin => BadgeVariant::Destructive,
        Role::Club => BadgeVariant::Secondary,
        Role::Regular | Role::Guest => BadgeVariant::Outline,
    }
}

/// Sortable user table. Sorting is local and starts in API order.
#[component]
pub fn UserTable(users: Vec<UserRecord>) -> Element {
    let mut sort = use_signal(|| Option::<SortState>::None);
    let rows = sorted_users(&users, sort());
    let colspan = USER_COLUMNS.len() + 1;

    rsx! {
        DataTable {
            DataTableHeader {
                for column in USER_COLUMNS.iter().copied() {
                    DataTableColumn {
                        key: "{column.header()}",
                        sort: column_sort(sort(), column),
                        on_sort: move |_| sort.set(next_sort(sort(), column)),
                        "{column.header()}"
                    }
                }
                DataTableColumn { "Actions" }
            }
            DataTableBody {
                if rows.is_empty() {
                    DataTableEmpty { colspan, "No users found." }
                }
                for user in rows {
                    UserRow { key: "{user.uuid}", user }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: UserRecord) -> Element {
    let variant = role_badge_variant(&user);
    let university_id = UserColumn::UniversityId.value(&user).to_string();

    rsx! {
        DataTableRow {
            DataTableCell { "{user.name}" }
            DataTableCell { "{user.email}" }
            DataTableCell { "{university_id}" }
            DataTableCell {
                Badge { variant, "{user.role}" }
            }
            DataTableCell {
                div { class: "user-actions",
                    Button { variant: ButtonVariant::Outline, "Update" }
                    Button { variant: ButtonVariant::Destructive, "Delete" }
                }
            }
        }
    }
}
