use crate::forms::FormFeedback;
use crate::routes::Route;
use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::{validate_fields, AppError, AppErrorKind, LoginRequest, LOGIN_NETWORK_ERROR};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardFooter, Form, Input, PasswordInput, ToastOptions,
};
use std::collections::HashMap;

const LOGIN_FIELDS: [&str; 2] = ["email", "password"];

/// What the form should show after the login server function failed.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginFailure {
    /// Per-field messages from server-side validation.
    Fields(HashMap<String, String>),
    /// A single message for a toast.
    Message(String),
}

impl LoginFailure {
    pub fn from_server_error(error: &str) -> Self {
        match AppError::from_server_error(error) {
            Some(app_error) if !app_error.field_errors.is_empty() => {
                LoginFailure::Fields(app_error.field_errors)
            }
            Some(app_error) if app_error.kind == AppErrorKind::Network => {
                LoginFailure::Message(LOGIN_NETWORK_ERROR.to_string())
            }
            Some(app_error) => LoginFailure::Message(app_error.message),
            None => LoginFailure::Message(LOGIN_NETWORK_ERROR.to_string()),
        }
    }
}

/// Email and password sign-in.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut feedback = use_signal(FormFeedback::default);
    let mut loading = use_signal(|| false);

    let current = move || LoginRequest {
        email: email(),
        password: password(),
    };

    let handle_login = move |_: FormEvent| async move {
        let req = current();
        feedback
            .write()
            .submit(&LOGIN_FIELDS, validate_fields(&req));
        if !feedback.read().is_valid() {
            return;
        }

        loading.set(true);
        match server::api::login(req.email, req.password).await {
            Ok(outcome) if outcome.is_accepted() => {
                session.mark_authenticated();
                toast.success(outcome.toast_message(), ToastOptions::new());
                navigator().push(Route::Home {});
            }
            Ok(outcome) => {
                session.log_out();
                toast.error(outcome.toast_message(), ToastOptions::new());
            }
            Err(e) => match LoginFailure::from_server_error(&e.to_string()) {
                LoginFailure::Fields(errors) => feedback.write().merge_server_errors(errors),
                LoginFailure::Message(message) => {
                    tracing::warn!(error = %e, "Login request failed");
                    toast.error(message, ToastOptions::new());
                }
            },
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",
                title: "Sign In",
                description: "Enter your email and password to access your account",

                CardContent {
                    Form { class: "auth-form", onsubmit: handle_login,
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
                        Button {
                            button_type: "submit",
                            full_width: true,
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Login" }
                        }
                    }
                }

                CardFooter {
                    span { "Don't have an account? " }
                    Link { class: "auth-link", to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
