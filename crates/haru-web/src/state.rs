//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use haru_core::{DiaryApiClient, User};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Shared API client (wrapped in Arc for cheap handoff to futures)
    pub api: Signal<Arc<DiaryApiClient>>,
    /// The signed-in user, if any
    pub user: Signal<Option<User>>,
    /// Whether the initial `/auth/me` probe has completed
    pub auth_checked: Signal<bool>,
    /// Entries per diary list page
    pub page_size: u32,
}

impl AppState {
    /// Whether a user is currently signed in
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        (self.user)().is_some()
    }

    /// Re-fetch the current user from the server.
    ///
    /// Any failure leaves the app signed out; only unexpected failures are
    /// logged, a plain 401 is the normal signed-out case.
    pub async fn refresh_user(mut self) {
        let api = (self.api)();
        match api.current_user().await {
            Ok(user) => {
                tracing::debug!(email = %user.email, "session active");
                self.user.set(Some(user));
            }
            Err(error) => {
                if !error.is_unauthorized() {
                    tracing::warn!("Failed to fetch current user: {error}");
                }
                self.user.set(None);
            }
        }
        self.auth_checked.set(true);
    }
}

/// Shorthand for pulling [`AppState`] out of context.
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}
