use dioxus::prelude::*;

/// `<form>` that never performs a native submission; the handler decides
/// what happens.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "form", None, false),
        Attribute::new("novalidate", true, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Message shown under a field when it fails validation.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(msg) if !msg.is_empty() => rsx! {
            p { class: "field-error", role: "alert", "{msg}" }
        },
        _ => rsx! {},
    }
}
