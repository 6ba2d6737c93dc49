//! # Domain models for student records
//!
//! Defines the data structures shared by the local cache, the remote record
//! client, and the views. Everything here is `Serialize + Deserialize` with
//! the exact field names the remote collection uses on the wire.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Student`] | One student record as returned by the remote collection and as stored in the local cache. `id` is `None` until the server assigns one on create. |
//! | [`RecordId`] | A server-assigned identifier. The mock API hands out string ids, but numeric ids show up in seeded data, so both shapes deserialize. |
//! | [`StudentDraft`] | Raw form values from the add/edit dialog. Converts to a [`Student`] only after validation has passed. |

use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(u64),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Text(s) => f.write_str(s),
            RecordId::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        RecordId::Number(n)
    }
}

/// One student record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub firstname: String,
    pub lastname: String,
    pub age: u32,
    pub phone: String,
    pub mail: String,
    pub role: String,
    /// Creation timestamp, ISO-8601.
    pub date: String,
}

impl Student {
    /// Key used when merging local and remote lists: the server id when
    /// present, otherwise the email address.
    pub fn reconcile_key(&self) -> String {
        match &self.id {
            Some(id) => id.to_string(),
            None => self.mail.clone(),
        }
    }
}

/// Raw form values for the add/edit dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentDraft {
    pub firstname: String,
    pub lastname: String,
    pub age: String,
    pub phone: String,
    pub mail: String,
    pub role: String,
}

impl StudentDraft {
    /// Pre-fill the dialog from an existing record.
    pub fn from_student(student: &Student) -> Self {
        Self {
            firstname: student.firstname.clone(),
            lastname: student.lastname.clone(),
            age: student.age.to_string(),
            phone: student.phone.clone(),
            mail: student.mail.clone(),
            role: student.role.clone(),
        }
    }

    /// Build a record stamped with `date`, carrying `id` over when editing.
    /// Returns `None` when the age field does not hold a positive integer;
    /// the validator reports that case to the user before this runs.
    pub fn to_student(&self, id: Option<RecordId>, date: String) -> Option<Student> {
        let age: u32 = self.age.trim().parse().ok().filter(|a| *a > 0)?;
        Some(Student {
            id,
            firstname: self.firstname.trim().to_string(),
            lastname: self.lastname.trim().to_string(),
            age,
            phone: self.phone.trim().to_string(),
            mail: self.mail.trim().to_string(),
            role: self.role.trim().to_string(),
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_accepts_string_and_number() {
        let s: Student = serde_json::from_str(
            r#"{"id":"7","firstname":"Ada","lastname":"Lovelace","age":28,"phone":"555-0100","mail":"ada@example.com","role":"student","date":"2025-07-24T09:27:00Z"}"#,
        )
        .unwrap();
        assert_eq!(s.id, Some(RecordId::Text("7".to_string())));

        let s: Student = serde_json::from_str(
            r#"{"id":7,"firstname":"Ada","lastname":"Lovelace","age":28,"phone":"555-0100","mail":"ada@example.com","role":"student","date":"2025-07-24T09:27:00Z"}"#,
        )
        .unwrap();
        assert_eq!(s.id, Some(RecordId::Number(7)));
        assert_eq!(s.reconcile_key(), "7");
    }

    #[test]
    fn missing_id_serializes_without_the_field() {
        let student = StudentDraft {
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
            age: "28".into(),
            phone: "555-0100".into(),
            mail: "ada@example.com".into(),
            role: "student".into(),
        }
        .to_student(None, "2025-07-24T09:27:00Z".to_string())
        .unwrap();

        let json = serde_json::to_string(&student).unwrap();
        assert!(!json.contains("\"id\""));
        assert_eq!(student.reconcile_key(), "ada@example.com");
    }

    #[test]
    fn draft_rejects_non_positive_age() {
        let mut draft = StudentDraft {
            age: "0".into(),
            ..StudentDraft::default()
        };
        assert!(draft.to_student(None, String::new()).is_none());
        draft.age = "abc".into();
        assert!(draft.to_student(None, String::new()).is_none());
        draft.age = " 19 ".into();
        assert_eq!(draft.to_student(None, String::new()).unwrap().age, 19);
    }
}
