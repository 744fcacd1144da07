//! Top navigation bar

use dioxus::prelude::*;

use crate::state::use_app_state;
use crate::ui::{Button, ButtonVariant};
use crate::Route;

/// Brand link plus auth-dependent navigation links.
#[component]
pub fn Navbar() -> Element {
    let state = use_app_state();
    let navigator = use_navigator();
    let mut logging_out = use_signal(|| false);
    let user = (state.user)();

    let on_log_out = move |_| {
        if logging_out() {
            return;
        }
        logging_out.set(true);
        spawn(async move {
            let mut state = state;
            let api = (state.api)();
            match api.log_out().await {
                Ok(()) => {
                    state.user.set(None);
                    navigator.push(Route::Login {});
                }
                Err(error) => tracing::warn!("Logout failed: {error}"),
            }
            logging_out.set(false);
        });
    };

    rsx! {
        nav { class: "navbar",
            Link { class: "navbar-brand", to: Route::DiaryList {}, "Haru" }
            div { class: "navbar-links",
                if let Some(user) = user {
                    Link { class: "navbar-link", to: Route::Profile {}, "{user.name}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: logging_out(),
                        onclick: on_log_out,
                        "Log out"
                    }
                } else {
                    Link { class: "navbar-link", to: Route::Login {}, "Log in" }
                    Link { class: "navbar-link", to: Route::Signup {}, "Sign up" }
                }
            }
        }
    }
}
