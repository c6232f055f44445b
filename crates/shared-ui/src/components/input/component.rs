use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff};
use dioxus_free_icons::Icon;

use crate::FieldError;

/// Labelled text input with an inline validation message.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_blur: EventHandler<FocusEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let invalid = error.as_ref().is_some_and(|e| !e.is_empty());
    let base = vec![
        Attribute::new("class", "input", None, false),
        Attribute::new("aria-invalid", if invalid { "true" } else { "false" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                onblur: move |evt| on_blur.call(evt),
                ..merged,
            }
            FieldError { message: error }
        }
    }
}

/// `type` attribute for a password field in the given reveal state.
pub fn password_input_type(revealed: bool) -> &'static str {
    if revealed {
        "text"
    } else {
        "password"
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordInput(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_blur: EventHandler<FocusEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut revealed = use_signal(|| false);
    let invalid = error.as_ref().is_some_and(|e| !e.is_empty());
    let base = vec![
        Attribute::new("class", "input", None, false),
        Attribute::new("aria-invalid", if invalid { "true" } else { "false" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let toggle_label = if revealed() { "Hide password" } else { "Show password" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            div { class: "input-with-toggle",
                input {
                    r#type: password_input_type(revealed()),
                    value: value,
                    placeholder: placeholder,
                    disabled: disabled,
                    oninput: move |evt| on_input.call(evt),
                    onblur: move |evt| on_blur.call(evt),
                    ..merged,
                }
                button {
                    class: "input-toggle",
                    r#type: "button",
                    "aria-label": toggle_label,
                    onclick: move |_| revealed.set(!revealed()),
                    if revealed() {
                        Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
                    } else {
                        Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                    }
                }
            }
            FieldError { message: error }
        }
    }
}
