use dioxus::prelude::*;
use store::validate::validate_student;
use store::{FieldErrors, StudentDraft};

use crate::ModalOverlay;

/// Whether the dialog creates a new record or edits an existing one.
/// Everything else about the two paths is identical, so one component
/// serves both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StudentDialogMode {
    Add,
    Edit,
}

impl StudentDialogMode {
    fn title(self) -> &'static str {
        match self {
            StudentDialogMode::Add => "Add New Student",
            StudentDialogMode::Edit => "Edit Student",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            StudentDialogMode::Add => "Add Student",
            StudentDialogMode::Edit => "Save",
        }
    }
}

/// Modal form shared by the add and edit paths.
///
/// Validation runs on submit; `on_submit` fires only once every field
/// passes. A field's error clears as soon as the user edits it again.
#[component]
pub fn StudentDialog(
    mode: StudentDialogMode,
    initial: StudentDraft,
    on_submit: EventHandler<StudentDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(move || initial.clone());
    let mut errors = use_signal(FieldErrors::default);

    let field_error = move |field: &str| errors().get(field).map(str::to_string);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = draft();
        let found = validate_student(&current);
        if found.is_empty() {
            on_submit.call(current);
        } else {
            errors.set(found);
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            form {
                class: "student-form",
                onsubmit: handle_submit,
                h2 { "{mode.title()}" }

                div {
                    class: "form-field",
                    label { "First Name" }
                    input {
                        r#type: "text",
                        value: draft().firstname,
                        oninput: move |evt: FormEvent| {
                            draft.with_mut(|d| d.firstname = evt.value());
                            errors.with_mut(|e| e.clear("firstname"));
                        },
                    }
                    if let Some(msg) = field_error("firstname") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div {
                    class: "form-field",
                    label { "Last Name" }
                    input {
                        r#type: "text",
                        value: draft().lastname,
                        oninput: move |evt: FormEvent| {
                            draft.with_mut(|d| d.lastname = evt.value());
                            errors.with_mut(|e| e.clear("lastname"));
                        },
                    }
                    if let Some(msg) = field_error("lastname") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div {
                    class: "form-field",
                    label { "Age" }
                    input {
                        r#type: "number",
                        value: draft().age,
                        oninput: move |evt: FormEvent| {
                            draft.with_mut(|d| d.age = evt.value());
                            errors.with_mut(|e| e.clear("age"));
                        },
                    }
                    if let Some(msg) = field_error("age") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div {
                    class: "form-field",
                    label { "Phone" }
                    input {
                        r#type: "text",
                        value: draft().phone,
                        oninput: move |evt: FormEvent| {
                            draft.with_mut(|d| d.phone = evt.value());
                            errors.with_mut(|e| e.clear("phone"));
                        },
                    }
                    if let Some(msg) = field_error("phone") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div {
                    class: "form-field",
                    label { "Email" }
                    input {
                        r#type: "email",
                        value: draft().mail,
                        oninput: move |evt: FormEvent| {
                            draft.with_mut(|d| d.mail = evt.value());
                            errors.with_mut(|e| e.clear("mail"));
                        },
                    }
                    if let Some(msg) = field_error("mail") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div {
                    class: "form-field",
                    label { "Role" }
                    input {
                        r#type: "text",
                        value: draft().role,
                        oninput: move |evt: FormEvent| {
                            draft.with_mut(|d| d.role = evt.value());
                            errors.with_mut(|e| e.clear("role"));
                        },
                    }
                    if let Some(msg) = field_error("role") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        r#type: "button",
                        class: "secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "primary",
                        "{mode.submit_label()}"
                    }
                }
            }
        }
    }
}
