//! Sign-up page view. Same session-only model as login, with the extra
//! name fields, password confirmation, and the strength meter.

use dioxus::prelude::*;
use store::validate::validate_signup;
use store::FieldErrors;
use ui::{start_session, use_session, PasswordStrengthMeter};

use crate::Route;

/// Sign-up page component.
#[component]
pub fn SignUp() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);

    if session().user.is_some() {
        nav.replace(Route::Students {});
        return rsx! {};
    }

    let field_error = move |field: &str| errors().get(field).map(str::to_string);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let found = validate_signup(
            &first_name(),
            &last_name(),
            &email(),
            &password(),
            &confirm_password(),
        );
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        let name = format!("{} {}", first_name().trim(), last_name().trim());
        start_session(session, email().trim(), Some(&name));
        nav.push(Route::Students {});
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h2 { "Create Account" }
                p { class: "auth-subtitle", "Join us and get started today" }

                form {
                    onsubmit: handle_signup,

                    div {
                        class: "form-row",
                        div {
                            class: "form-field",
                            label { r#for: "signup-first", "First Name" }
                            input {
                                id: "signup-first",
                                r#type: "text",
                                placeholder: "John",
                                value: first_name(),
                                oninput: move |evt: FormEvent| {
                                    first_name.set(evt.value());
                                    errors.with_mut(|e| e.clear("firstName"));
                                },
                            }
                            if let Some(msg) = field_error("firstName") {
                                p { class: "field-error", "{msg}" }
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "signup-last", "Last Name" }
                            input {
                                id: "signup-last",
                                r#type: "text",
                                placeholder: "Doe",
                                value: last_name(),
                                oninput: move |evt: FormEvent| {
                                    last_name.set(evt.value());
                                    errors.with_mut(|e| e.clear("lastName"));
                                },
                            }
                            if let Some(msg) = field_error("lastName") {
                                p { class: "field-error", "{msg}" }
                            }
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "signup-email", "Email Address" }
                        input {
                            id: "signup-email",
                            r#type: "email",
                            placeholder: "john.doe@example.com",
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
                        label { r#for: "signup-password", "Password" }
                        input {
                            id: "signup-password",
                            r#type: "password",
                            placeholder: "Create a strong password",
                            value: password(),
                            oninput: move |evt: FormEvent| {
                                password.set(evt.value());
                                errors.with_mut(|e| e.clear("password"));
                            },
                        }
                        PasswordStrengthMeter { password: password() }
                        if let Some(msg) = field_error("password") {
                            p { class: "field-error", "{msg}" }
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "signup-confirm", "Confirm Password" }
                        input {
                            id: "signup-confirm",
                            r#type: "password",
                            placeholder: "Confirm your password",
                            value: confirm_password(),
                            oninput: move |evt: FormEvent| {
                                confirm_password.set(evt.value());
                                errors.with_mut(|e| e.clear("confirmPassword"));
                            },
                        }
                        if let Some(msg) = field_error("confirmPassword") {
                            p { class: "field-error", "{msg}" }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "primary auth-submit",
                        "Create Account"
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in here" }
                }
            }
        }
    }
}
