//! # Browser storage adapters — `sessionStorage` and `localStorage`
//!
//! The [`KeyValueStore`] implementations used on the **web platform**.
//! [`SessionStorage`] backs the per-tab session flag and identity keys;
//! [`LocalStorage`] backs the persistent record cache.
//!
//! Both adapters swallow storage-layer failures (blocked third-party
//! storage, quota, missing `window`) and degrade to "no data": reads return
//! `None`, writes log a warning and do nothing. An inaccessible storage
//! area must never take down the rest of the application — the session
//! simply reads as absent and the cache as empty.

use crate::keyvalue::KeyValueStore;

/// Per-tab ephemeral storage (`window.sessionStorage`).
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStorage;

/// Persistent storage (`window.localStorage`).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl SessionStorage {
    pub fn new() -> Self {
        Self
    }

    fn area() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn area() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

fn read(area: Option<web_sys::Storage>, key: &str) -> Option<String> {
    area?.get_item(key).ok().flatten()
}

fn write(area: Option<web_sys::Storage>, kind: &str, key: &str, value: &str) {
    let Some(area) = area else {
        tracing::warn!("{kind} unavailable, dropping write of {key}");
        return;
    };
    if area.set_item(key, value).is_err() {
        tracing::warn!("{kind} write failed for {key}");
    }
}

fn erase(area: Option<web_sys::Storage>, key: &str) {
    if let Some(area) = area {
        let _ = area.remove_item(key);
    }
}

impl KeyValueStore for SessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        read(Self::area(), key)
    }

    fn set(&self, key: &str, value: &str) {
        write(Self::area(), "sessionStorage", key, value);
    }

    fn remove(&self, key: &str) {
        erase(Self::area(), key);
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        read(Self::area(), key)
    }

    fn set(&self, key: &str, value: &str) {
        write(Self::area(), "localStorage", key, value);
    }

    fn remove(&self, key: &str) {
        erase(Self::area(), key);
    }
}
