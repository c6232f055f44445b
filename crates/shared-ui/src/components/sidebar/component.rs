use dioxus::prelude::*;

/// Fixed navigation column on wide screens. Narrow screens hide it and use a
/// [`Sheet`](crate::Sheet) instead.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Heading block; shows the club name or the role.
#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

/// One navigation entry. `active` highlights the current page.
#[component]
pub fn SidebarMenuItem(#[props(default = false)] active: bool, children: Element) -> Element {
    rsx! {
        li {
            class: "sidebar-menu-item",
            "data-active": if active { "true" } else { "false" },
            "aria-current": if active { "page" } else { "false" },
            {children}
        }
    }
}

/// Main content area next to the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}

/// Hamburger button that opens the mobile navigation sheet.
#[component]
pub fn SidebarTrigger(on_open: EventHandler<()>, children: Element) -> Element {
    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Open navigation",
            onclick: move |_| on_open.call(()),
            {children}
        }
    }
}
