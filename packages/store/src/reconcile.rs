//! # Record reconciler
//!
//! Merges the local record cache with the remotely fetched list into the
//! one list the table renders. Local records come first, in cache order
//! (newest first), so a record the user just created stays visible even
//! while the remote copy lags or is paginated away. Remote records whose
//! id-or-email key matches a local record are dropped — once the remote
//! copy does show up it must not appear twice.
//!
//! The merge is deterministic and idempotent: feeding its own output back
//! in as the remote list yields the same result.

use std::collections::HashSet;

use crate::models::Student;

/// Local overlay first, then remote records not shadowed by it.
pub fn reconcile(local: &[Student], remote: Vec<Student>) -> Vec<Student> {
    let local_keys: HashSet<String> = local.iter().map(Student::reconcile_key).collect();
    let mut merged: Vec<Student> = local.to_vec();
    merged.extend(
        remote
            .into_iter()
            .filter(|s| !local_keys.contains(&s.reconcile_key())),
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;

    fn student(id: Option<u64>, mail: &str) -> Student {
        Student {
            id: id.map(RecordId::from),
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
            age: 28,
            phone: "555-0100".into(),
            mail: mail.into(),
            role: "student".into(),
            date: "2025-07-24T09:27:00Z".into(),
        }
    }

    #[test]
    fn local_copy_wins_and_comes_first() {
        let mut local_one = student(Some(1), "a@x.com");
        local_one.role = "local".into();
        let local = vec![local_one];
        let remote = vec![student(Some(1), "a@x.com"), student(Some(2), "b@x.com")];

        let merged = reconcile(&local, remote);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].reconcile_key(), "1");
        assert_eq!(merged[0].role, "local");
        assert_eq!(merged[1].reconcile_key(), "2");
    }

    #[test]
    fn dedup_falls_back_to_email_when_id_is_absent() {
        let local = vec![student(None, "a@x.com")];
        let remote = vec![student(None, "a@x.com"), student(None, "b@x.com")];

        let merged = reconcile(&local, remote);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].reconcile_key(), "a@x.com");
        assert_eq!(merged[1].reconcile_key(), "b@x.com");
    }

    #[test]
    fn remote_order_is_preserved() {
        let local = vec![student(Some(9), "l@x.com")];
        let remote = vec![
            student(Some(3), "c@x.com"),
            student(Some(1), "a@x.com"),
            student(Some(2), "b@x.com"),
        ];

        let merged = reconcile(&local, remote.clone());
        let keys: Vec<String> = merged.iter().map(Student::reconcile_key).collect();
        assert_eq!(keys, ["9", "3", "1", "2"]);

        // Same inputs, same output.
        assert_eq!(merged, reconcile(&local, remote));
    }

    #[test]
    fn idempotent_under_repeated_reconciliation() {
        let local = vec![student(Some(1), "a@x.com"), student(None, "n@x.com")];
        let remote = vec![
            student(Some(1), "a@x.com"),
            student(Some(2), "b@x.com"),
            student(None, "n@x.com"),
        ];

        let once = reconcile(&local, remote);
        let twice = reconcile(&local, once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_inputs() {
        assert!(reconcile(&[], Vec::new()).is_empty());
        let remote = vec![student(Some(1), "a@x.com")];
        assert_eq!(reconcile(&[], remote.clone()), remote);
        let local = vec![student(Some(1), "a@x.com")];
        assert_eq!(reconcile(&local, Vec::new()), local);
    }
}
