//! Platform storage constructors.
//!
//! Returns the adapters from the `store` crate backed by the appropriate
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): the browser's `sessionStorage` for the
//!   session and `localStorage` for the record cache.
//! - **Native** (tests, headless tooling): process-wide in-memory areas, so
//!   state written through one constructor call is visible to the next.

use store::{LocalCache, SessionStore};

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
mod native {
    use std::sync::OnceLock;

    use store::MemoryStore;

    static SESSION_AREA: OnceLock<MemoryStore> = OnceLock::new();
    static LOCAL_AREA: OnceLock<MemoryStore> = OnceLock::new();

    pub fn session_area() -> MemoryStore {
        SESSION_AREA.get_or_init(MemoryStore::new).clone()
    }

    pub fn local_area() -> MemoryStore {
        LOCAL_AREA.get_or_init(MemoryStore::new).clone()
    }
}

/// The session store for this platform.
pub fn session_store() -> SessionStore<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::SessionStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionStore::new(native::session_area())
    }
}

/// The local record cache for this platform.
pub fn local_cache() -> LocalCache<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        LocalCache::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        LocalCache::new(native::local_area())
    }
}
