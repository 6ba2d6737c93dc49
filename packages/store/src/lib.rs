pub mod cache;
pub mod models;
pub mod reconcile;
pub mod session;
pub mod validate;

mod keyvalue;
pub use keyvalue::{KeyValueStore, MemoryStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::{LocalStorage, SessionStorage};

pub use cache::LocalCache;
pub use models::{RecordId, Student, StudentDraft};
pub use reconcile::reconcile;
pub use session::{SessionStore, SessionUser};
pub use validate::{FieldErrors, PasswordStrength};
