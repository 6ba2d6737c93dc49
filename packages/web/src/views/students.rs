//! Student table: the remote list merged with the local overlay, plus
//! search, column filters, and add/edit/delete through the cache-aware
//! flows.

use api::RecordClient;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use store::{Student, StudentDraft};
use ui::{
    local_cache, use_session, ConfirmDialog, LogoutButton, StudentDialog, StudentDialogMode,
};

use crate::Route;

/// Remote load progression for the screen. Mutating operations report
/// through the banner without revisiting `Loading`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoadState {
    Loading,
    Ready,
    Failed,
}

/// Column selector for the search box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FilterField {
    All,
    FirstName,
    LastName,
    Phone,
    Age,
    Role,
}

impl FilterField {
    const OPTIONS: [FilterField; 6] = [
        FilterField::All,
        FilterField::FirstName,
        FilterField::LastName,
        FilterField::Phone,
        FilterField::Age,
        FilterField::Role,
    ];

    fn label(self) -> &'static str {
        match self {
            FilterField::All => "All",
            FilterField::FirstName => "First Name",
            FilterField::LastName => "Last Name",
            FilterField::Phone => "Phone",
            FilterField::Age => "Age",
            FilterField::Role => "Role",
        }
    }
}

/// Case-insensitive substring match of `term` against the selected column,
/// or against every field joined when the filter is `All`.
fn matches(student: &Student, filter: FilterField, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    let haystack = match filter {
        FilterField::All => format!(
            "{} {} {} {} {} {}",
            student.firstname,
            student.lastname,
            student.mail,
            student.role,
            student.phone,
            student.age
        ),
        FilterField::FirstName => student.firstname.clone(),
        FilterField::LastName => student.lastname.clone(),
        FilterField::Phone => student.phone.clone(),
        FilterField::Age => student.age.to_string(),
        FilterField::Role => student.role.clone(),
    };
    haystack.to_lowercase().contains(&term)
}

/// Render the stored ISO-8601 timestamp as a short date. Anything that
/// does not parse is shown as stored.
fn format_date(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    DateTime::parse_from_rfc3339(iso)
        .map(|d| d.format("%b %e, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

/// Student table page component.
#[component]
pub fn Students() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let mut students = use_signal(Vec::<Student>::new);
    let mut load_state = use_signal(|| LoadState::Loading);
    let mut op_error = use_signal(|| Option::<String>::None);
    let mut search = use_signal(String::new);
    let mut filter = use_signal(|| FilterField::All);
    let mut show_add = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Student>::None);
    let mut deleting = use_signal(|| Option::<Student>::None);

    // Fetch and reconcile once at mount.
    let _loader = use_resource(move || async move {
        if session().user.is_none() {
            return;
        }
        let client = RecordClient::new();
        match api::load_students(&client, &local_cache()).await {
            Ok(list) => {
                students.set(list);
                load_state.set(LoadState::Ready);
            }
            Err(err) => {
                tracing::error!("failed to load students: {err}");
                students.set(local_cache().load());
                load_state.set(LoadState::Failed);
            }
        }
    });

    // Anonymous visitors go to the login page.
    if session().user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let handle_add = move |draft: StudentDraft| {
        show_add.set(false);
        let Some(record) = draft.to_student(None, Utc::now().to_rfc3339()) else {
            return;
        };
        spawn(async move {
            let client = RecordClient::new();
            match api::create_student(&client, &local_cache(), &record).await {
                Ok(created) => {
                    students.with_mut(|list| list.insert(0, created));
                    op_error.set(None);
                }
                Err(err) => {
                    tracing::error!("failed to add student: {err}");
                    op_error.set(Some("Could not add the student. Please try again.".to_string()));
                }
            }
        });
    };

    let handle_edit = move |draft: StudentDraft| {
        let Some(original) = editing() else {
            return;
        };
        editing.set(None);
        let Some(id) = original.id.clone() else {
            return;
        };
        let Some(record) = draft.to_student(Some(id.clone()), original.date.clone()) else {
            return;
        };
        spawn(async move {
            let client = RecordClient::new();
            match api::update_student(&client, &local_cache(), &id, &record).await {
                Ok(updated) => {
                    let key = updated.reconcile_key();
                    students.with_mut(|list| {
                        for slot in list.iter_mut() {
                            if slot.reconcile_key() == key {
                                *slot = updated.clone();
                            }
                        }
                    });
                    op_error.set(None);
                }
                Err(err) => {
                    tracing::error!("failed to update student: {err}");
                    op_error.set(Some("Could not save the changes. Please try again.".to_string()));
                }
            }
        });
    };

    let handle_delete = move |_| {
        let Some(target) = deleting() else {
            return;
        };
        deleting.set(None);
        spawn(async move {
            let client = RecordClient::new();
            let key = target.reconcile_key();
            match api::delete_student(&client, &local_cache(), &target).await {
                Ok(()) => {
                    students.with_mut(|list| list.retain(|s| s.reconcile_key() != key));
                    op_error.set(None);
                }
                Err(err) => {
                    tracing::error!("failed to delete student: {err}");
                    op_error.set(Some("Could not delete the student. Please try again.".to_string()));
                }
            }
        });
    };

    let filtered: Vec<Student> = students()
        .into_iter()
        .filter(|s| matches(s, filter(), &search()))
        .collect();

    rsx! {
        div {
            class: "students-page",

            header {
                class: "page-header",
                h1 { "Students" }
                div {
                    class: "header-user",
                    if let Some(user) = session().user {
                        span { class: "user-name", "{user.name}" }
                    }
                    LogoutButton { class: "secondary" }
                }
            }

            div {
                class: "toolbar",
                div {
                    class: "search-box",
                    input {
                        r#type: "text",
                        placeholder: "Search...",
                        value: search(),
                        oninput: move |evt: FormEvent| search.set(evt.value()),
                    }
                    if !search().is_empty() {
                        button {
                            class: "search-clear",
                            onclick: move |_| search.set(String::new()),
                            "×"
                        }
                    }
                }
                div {
                    class: "filter-pills",
                    for option in FilterField::OPTIONS {
                        button {
                            key: "{option.label()}",
                            class: if filter() == option { "pill pill--active" } else { "pill" },
                            onclick: move |_| filter.set(option),
                            "{option.label()}"
                        }
                    }
                }
                button {
                    class: "primary",
                    onclick: move |_| show_add.set(true),
                    "Add Student"
                }
            }

            if load_state() == LoadState::Failed {
                div {
                    class: "banner banner--warning",
                    "Could not load students from the server. Showing locally saved records only."
                }
            }
            if let Some(message) = op_error() {
                div {
                    class: "banner banner--error",
                    span { "{message}" }
                    button {
                        class: "banner-dismiss",
                        onclick: move |_| op_error.set(None),
                        "×"
                    }
                }
            }

            main {
                class: "table-wrap",
                table {
                    thead {
                        tr {
                            th { "First Name" }
                            th { "Last Name" }
                            th { "Age" }
                            th { "Phone" }
                            th { "Email" }
                            th { "Role" }
                            th { "Date" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        if load_state() == LoadState::Loading {
                            tr {
                                td { colspan: "8", class: "table-message", "Loading..." }
                            }
                        } else if filtered.is_empty() {
                            tr {
                                td { colspan: "8", class: "table-message", "No students found." }
                            }
                        } else {
                            for student in filtered {
                                StudentRow {
                                    key: "{student.reconcile_key()}",
                                    student: student.clone(),
                                    on_edit: move |s| editing.set(Some(s)),
                                    on_delete: move |s| deleting.set(Some(s)),
                                }
                            }
                        }
                    }
                }
            }
        }

        if show_add() {
            StudentDialog {
                mode: StudentDialogMode::Add,
                initial: StudentDraft::default(),
                on_submit: handle_add,
                on_cancel: move |_| show_add.set(false),
            }
        }
        if let Some(student) = editing() {
            StudentDialog {
                mode: StudentDialogMode::Edit,
                initial: StudentDraft::from_student(&student),
                on_submit: handle_edit,
                on_cancel: move |_| editing.set(None),
            }
        }
        if let Some(student) = deleting() {
            ConfirmDialog {
                message: format!("Delete {} {}?", student.firstname, student.lastname),
                on_confirm: handle_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

/// One table row. The owning screen hands the record back through the
/// edit/delete callbacks.
#[component]
fn StudentRow(
    student: Student,
    on_edit: EventHandler<Student>,
    on_delete: EventHandler<Student>,
) -> Element {
    let date = format_date(&student.date);
    let edit_target = student.clone();
    let delete_target = student.clone();

    rsx! {
        tr {
            td { "{student.firstname}" }
            td { "{student.lastname}" }
            td { "{student.age}" }
            td { "{student.phone}" }
            td { "{student.mail}" }
            td { "{student.role}" }
            td { "{date}" }
            td {
                class: "row-actions",
                button {
                    class: "link",
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    "Edit"
                }
                button {
                    class: "link link--danger",
                    onclick: move |_| on_delete.call(delete_target.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use store::RecordId;

    use super::*;

    fn student() -> Student {
        Student {
            id: Some(RecordId::from("1")),
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
            age: 28,
            phone: "555-0100".into(),
            mail: "ada@example.com".into(),
            role: "Student".into(),
            date: "2025-07-24T09:27:00Z".into(),
        }
    }

    #[test]
    fn empty_term_matches_everything() {
        assert!(matches(&student(), FilterField::All, ""));
        assert!(matches(&student(), FilterField::Role, "   "));
    }

    #[test]
    fn all_filter_searches_every_field() {
        let s = student();
        assert!(matches(&s, FilterField::All, "ada"));
        assert!(matches(&s, FilterField::All, "LOVELACE"));
        assert!(matches(&s, FilterField::All, "0100"));
        assert!(matches(&s, FilterField::All, "28"));
        assert!(!matches(&s, FilterField::All, "grace"));
    }

    #[test]
    fn column_filter_is_scoped() {
        let s = student();
        assert!(matches(&s, FilterField::FirstName, "ada"));
        assert!(!matches(&s, FilterField::LastName, "ada"));
        assert!(matches(&s, FilterField::Age, "28"));
        assert!(matches(&s, FilterField::Role, "student"));
    }

    #[test]
    fn dates_render_short_or_as_stored() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("2025-07-24T09:27:00Z"), "Jul 24, 2025");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
