//! Session context and hooks for the UI.

use chrono::Utc;
use dioxus::prelude::*;
use store::SessionUser;

use crate::storage::session_store;

/// Login state for the application, restored once from session storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that restores and owns the session state.
/// Wrap the app with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| SessionState {
        user: session_store().restore(),
    });
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Persist a fresh login and publish it to the shared state.
pub fn start_session(mut state: Signal<SessionState>, email: &str, name: Option<&str>) {
    let user = session_store().persist(email, name, &Utc::now().to_rfc3339());
    tracing::info!("session started for {}", user.email);
    state.set(SessionState { user: Some(user) });
}

/// Clear the stored session and the shared state. The local record cache
/// is left alone.
pub fn end_session(mut state: Signal<SessionState>) {
    session_store().clear();
    state.set(SessionState::default());
}

/// Button that ends the session.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| end_session(session),
            "{label}"
        }
    }
}
