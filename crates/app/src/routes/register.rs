use crate::forms::FormFeedback;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{validate_fields, RegisterRequest};
use shared_ui::{Button, Card, CardContent, CardFooter, Form, Input, PasswordInput};

const REGISTER_FIELDS: [&str; 4] = ["name", "email", "password", "university_id"];

/// Account sign-up. Values are validated and logged; no account is created
/// upstream yet, so a valid submit moves on to the login page.
#[component]
pub fn Register() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut university_id = use_signal(String::new);
    let mut feedback = use_signal(FormFeedback::default);

    let current = move || RegisterRequest {
        name: name(),
        email: email(),
        password: password(),
        university_id: university_id(),
    };

    let handle_register = move |_: FormEvent| {
        let req = current();
        feedback
            .write()
            .submit(&REGISTER_FIELDS, validate_fields(&req));
        if feedback.read().is_valid() {
            tracing::info!(values = %req.redacted(), "Registration submitted");
            navigator().push(Route::Login {});
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",
                title: "Create an account",
                description: "Register with your university details",

                CardContent {
                    Form { class: "auth-form", onsubmit: handle_register,
                        Input {
                            label: "Name",
                            placeholder: "Ada",
                            value: name(),
                            error: feedback.read().error("name"),
                            on_input: move |e: FormEvent| {
                                name.set(e.value());
                                feedback.write().edit("name", validate_fields(&current()));
                            },
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@university.edu",
                            value: email(),
                            error: feedback.read().error("email"),
                            on_input: move |e: FormEvent| {
                                email.set(e.value());
                                feedback.write().edit("email", validate_fields(&current()));
                            },
                        }
                        PasswordInput {
                            label: "Password",
                            placeholder: "At least 8 characters",
                            value: password(),
                            error: feedback.read().error("password"),
                            on_input: move |e: FormEvent| {
                                password.set(e.value());
                                feedback.write().edit("password", validate_fields(&current()));
                            },
                        }
                        Input {
                            label: "University ID",
                            placeholder: "20231234",
                            value: university_id(),
                            error: feedback.read().error("university_id"),
                            on_input: move |e: FormEvent| {
                                university_id.set(e.value());
                                feedback
                                    .write()
                                    .edit("university_id", validate_fields(&current()));
                            },
                        }
                        Button { button_type: "submit", full_width: true, "Register" }
                    }
                }

                CardFooter {
                    span { "Already have an account? " }
                    Link { class: "auth-link", to: Route::Login {}, "Login" }
                }
            }
        }
    }
}
