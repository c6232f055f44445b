use dioxus::prelude::*;

/// Sort state shown on a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnSort {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl ColumnSort {
    /// Value for the header's `aria-sort` attribute.
    pub fn aria(&self) -> &'static str {
        match self {
            ColumnSort::Unsorted => "none",
            ColumnSort::Ascending => "ascending",
            ColumnSort::Descending => "descending",
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            ColumnSort::Unsorted => "\u{2195}",
            ColumnSort::Ascending => "\u{2191}",
            ColumnSort::Descending => "\u{2193}",
        }
    }
}

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header cell. Passing `on_sort` makes the header a sort toggle.
#[component]
pub fn DataTableColumn(
    #[props(default)] sort: ColumnSort,
    #[props(default)] on_sort: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    match on_sort {
        Some(handler) => rsx! {
            th { "aria-sort": sort.aria(),
                button {
                    class: "data-table-sort",
                    r#type: "button",
                    onclick: move |evt| handler.call(evt),
                    {children}
                    span { class: "data-table-sort-indicator", "data-sort": sort.aria(),
                        "{sort.indicator()}"
                    }
                }
            }
        },
        None => rsx! {
            th { {children} }
        },
    }
}

#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Single full-width row shown when there is nothing to list.
#[component]
pub fn DataTableEmpty(colspan: usize, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", {children} }
        }
    }
}
