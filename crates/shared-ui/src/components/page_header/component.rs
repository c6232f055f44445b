use dioxus::prelude::*;

/// Title row at the top of a dashboard page.
#[component]
pub fn PageHeader(title: String, #[props(default)] subtitle: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            h1 { class: "page-title", "{title}" }
            if !subtitle.is_empty() {
                p { class: "page-subtitle", "{subtitle}" }
            }
        }
    }
}
