//! # Local record cache
//!
//! The persistent overlay of records created by this client, newest first,
//! under the `localStudents` key. The remote mock store does not reliably
//! persist writes, so every successfully created record is also remembered
//! here and the reconciler merges the two lists at load time.
//!
//! The cache is keyed separately from the session and survives logout.
//! Delete prunes the matching entry and edit replaces it, so a cached
//! record can neither reappear after its deletion nor go stale after an
//! edit. Corrupt or missing data reads as an empty list.

use crate::keyvalue::KeyValueStore;
use crate::models::Student;

pub const LOCAL_STUDENTS_KEY: &str = "localStudents";

/// JSON-encoded list of locally-created records on a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct LocalCache<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> LocalCache<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All cached records, newest first.
    pub fn load(&self) -> Vec<Student> {
        let Some(raw) = self.storage.get(LOCAL_STUDENTS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(students) => students,
            Err(err) => {
                tracing::warn!("discarding unreadable local cache: {err}");
                Vec::new()
            }
        }
    }

    /// Remember a freshly created record at the front of the list.
    pub fn prepend(&self, student: &Student) {
        let mut students = self.load();
        students.insert(0, student.clone());
        self.save(&students);
    }

    /// Refresh the cached copy sharing `student`'s reconcile key, if any.
    pub fn replace(&self, student: &Student) {
        let mut students = self.load();
        let key = student.reconcile_key();
        let mut changed = false;
        for slot in &mut students {
            if slot.reconcile_key() == key {
                *slot = student.clone();
                changed = true;
            }
        }
        if changed {
            self.save(&students);
        }
    }

    /// Drop the cached copy with the given reconcile key, if any.
    pub fn remove(&self, key: &str) {
        let mut students = self.load();
        let before = students.len();
        students.retain(|s| s.reconcile_key() != key);
        if students.len() != before {
            self.save(&students);
        }
    }

    fn save(&self, students: &[Student]) {
        match serde_json::to_string(students) {
            Ok(raw) => self.storage.set(LOCAL_STUDENTS_KEY, &raw),
            Err(err) => tracing::warn!("failed to encode local cache: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyvalue::MemoryStore;
    use crate::models::RecordId;

    fn student(id: &str, mail: &str) -> Student {
        Student {
            id: Some(RecordId::from(id)),
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
    fn newest_first() {
        let cache = LocalCache::new(MemoryStore::new());
        cache.prepend(&student("1", "a@x.com"));
        cache.prepend(&student("2", "b@x.com"));

        let students = cache.load();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].reconcile_key(), "2");
        assert_eq!(students[1].reconcile_key(), "1");
    }

    #[test]
    fn corrupt_json_reads_as_empty() {
        let area = MemoryStore::new();
        area.set(LOCAL_STUDENTS_KEY, "{not json");
        let cache = LocalCache::new(area);
        assert!(cache.load().is_empty());
    }

    #[test]
    fn remove_prunes_by_key() {
        let cache = LocalCache::new(MemoryStore::new());
        cache.prepend(&student("1", "a@x.com"));
        cache.prepend(&student("2", "b@x.com"));

        cache.remove("1");
        let students = cache.load();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].reconcile_key(), "2");

        // Unknown key is a no-op.
        cache.remove("99");
        assert_eq!(cache.load().len(), 1);
    }

    #[test]
    fn replace_updates_the_matching_entry() {
        let cache = LocalCache::new(MemoryStore::new());
        cache.prepend(&student("1", "a@x.com"));

        let mut updated = student("1", "a@x.com");
        updated.role = "teacher".into();
        cache.replace(&updated);

        assert_eq!(cache.load()[0].role, "teacher");

        // A record the cache never held is not inserted.
        cache.replace(&student("7", "new@x.com"));
        assert_eq!(cache.load().len(), 1);
    }
}
