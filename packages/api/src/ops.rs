//! # Operation flows
//!
//! The views call these instead of touching [`RecordApi`] and
//! [`LocalCache`] separately, so the one rule about ordering lives here:
//! the cache changes only after the remote call has succeeded. A failed
//! remote operation therefore leaves both the cache and the caller's
//! displayed list exactly as they were.

use store::{reconcile, KeyValueStore, LocalCache, RecordId, Student};

use crate::client::RecordApi;
use crate::error::ApiError;

/// Fetch the remote list and merge the local overlay into it.
pub async fn load_students<A, S>(
    api: &A,
    cache: &LocalCache<S>,
) -> Result<Vec<Student>, ApiError>
where
    A: RecordApi,
    S: KeyValueStore,
{
    let remote = api.list().await?;
    Ok(reconcile(&cache.load(), remote))
}

/// Create the record remotely, then remember the server's copy locally.
pub async fn create_student<A, S>(
    api: &A,
    cache: &LocalCache<S>,
    student: &Student,
) -> Result<Student, ApiError>
where
    A: RecordApi,
    S: KeyValueStore,
{
    let created = api.create(student).await?;
    cache.prepend(&created);
    Ok(created)
}

/// Update the record remotely, then refresh any cached copy of it.
pub async fn update_student<A, S>(
    api: &A,
    cache: &LocalCache<S>,
    id: &RecordId,
    student: &Student,
) -> Result<Student, ApiError>
where
    A: RecordApi,
    S: KeyValueStore,
{
    let updated = api.update(id, student).await?;
    cache.replace(&updated);
    Ok(updated)
}

/// Delete the record remotely, then prune the cached copy so it cannot
/// reappear on the next load.
pub async fn delete_student<A, S>(
    api: &A,
    cache: &LocalCache<S>,
    student: &Student,
) -> Result<(), ApiError>
where
    A: RecordApi,
    S: KeyValueStore,
{
    if let Some(id) = &student.id {
        api.delete(id).await?;
    }
    cache.remove(&student.reconcile_key());
    Ok(())
}
