//! # API crate — remote record access for the student roster
//!
//! Everything the views need to talk to the hosted mock collection:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`RecordClient`], the `reqwest`-backed CRUD client, and the [`RecordApi`] trait seam it implements so tests can substitute a fake |
//! | [`error`] | [`ApiError`], the single failure type for remote operations |
//! | [`ops`] | Cache-aware flows (`load`/`create`/`update`/`delete`) that keep the local record cache in step with the remote store |
//!
//! The views never call `reqwest` directly; they go through [`ops`] so the
//! rule "the cache changes only after the remote call succeeded" lives in
//! one place.

mod client;
mod error;
mod ops;

pub use client::{RecordApi, RecordClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use ops::{create_student, delete_student, load_students, update_student};
