//! Session context and hooks for the UI.
//!
//! The session value is written in exactly two places: [`SessionState::sign_in`]
//! after a successful login or 2FA verification, and [`SessionState::sign_out`].
//! Everything else only reads it through [`use_session`].

use api::{AccountApi, HttpApi, UserInfo};
use dioxus::prelude::*;

use crate::notice::Notice;

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    /// True until the initial `get_user_info` call has resolved.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn sign_in(&mut self, user: UserInfo) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}

/// Get the current session. Returns a signal that updates on sign in and out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the API client injected by the app shell.
pub fn use_api() -> HttpApi {
    use_context::<HttpApi>()
}

/// Provider component that owns the session value.
/// Wrap your app with this component; it expects an [`HttpApi`] in context.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let api = use_api();
    let mut session = use_context_provider(|| Signal::new(SessionState::default()));

    // Restore an existing session cookie on mount
    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            match api.get_user_info().await {
                Ok(user) => {
                    tracing::info!("Session restored: {}", user.is_some());
                    session.set(SessionState {
                        user,
                        loading: false,
                    });
                }
                Err(e) => {
                    tracing::warn!("Could not restore session: {}", e);
                    session.write().sign_out();
                }
            }
        }
    });

    rsx! {
        {children}
    }
}

/// End the server session. The local session is cleared by the caller either
/// way; a failed call only produces a notice.
pub async fn end_session<A: AccountApi>(api: &A) -> Notice {
    match api.logout().await {
        Ok(()) => {
            tracing::info!("Signed out");
            Notice::info("Signed out")
        }
        Err(e) => {
            tracing::warn!("Logout request failed: {}", e);
            Notice::error("Signed out locally, but the server could not be reached")
        }
    }
}
