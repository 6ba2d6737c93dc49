//! Login page view with an email/password form.
//!
//! Authentication is session-only: there is no account server, so any
//! input that passes validation establishes a session in the per-tab
//! storage.

use dioxus::prelude::*;
use store::validate::validate_login;
use store::FieldErrors;
use ui::{start_session, use_session};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);

    // Already signed in: straight to the table.
    if session().user.is_some() {
        nav.replace(Route::Students {});
        return rsx! {};
    }

    let field_error = move |field: &str| errors().get(field).map(str::to_string);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let found = validate_login(&email(), &password());
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        start_session(session, email().trim(), None);
        nav.push(Route::Students {});
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h2 { "Welcome Back" }
                p { class: "auth-subtitle", "Sign in to manage your students" }

                form {
                    onsubmit: handle_login,

                    div {
                        class: "form-field",
                        label { r#for: "login-email", "Email Address" }
                        input {
                            id: "login-email",
                            r#type: "email",
                            placeholder: "Enter your email",
                            value: email(),
                            oninput: move |evt: FormEvent| {
                                email.set(evt.value());
                                errors.with_mut(|e| e.clear("email"));
                            },
                        }
                        if let Some(msg) = field_error("email") {
                            p { class: "field-error", "{msg}" }
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "login-password", "Password" }
                        input {
                            id: "login-password",
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            oninput: move |evt: FormEvent| {
                                password.set(evt.value());
                                errors.with_mut(|e| e.clear("password"));
                            },
                        }
                        if let Some(msg) = field_error("password") {
                            p { class: "field-error", "{msg}" }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "primary auth-submit",
                        "Sign In"
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::SignUp {}, "Create one here" }
                }

                p {
                    class: "auth-demo-note",
                    "Demo: use any email and password (6+ characters)"
                }
            }
        }
    }
}
