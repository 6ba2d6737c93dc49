//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{end_session, start_session, use_session, LogoutButton, SessionProvider, SessionState};

mod storage;
pub use storage::{local_cache, session_store};

mod modal;
pub use modal::ModalOverlay;

mod confirm;
pub use confirm::ConfirmDialog;

mod student_form;
pub use student_form::{StudentDialog, StudentDialogMode};

mod password_meter;
pub use password_meter::PasswordStrengthMeter;
