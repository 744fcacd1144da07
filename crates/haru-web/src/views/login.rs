//! Login page

use dioxus::prelude::*;

use crate::state::use_app_state;
use crate::ui::{Button, ButtonVariant, Input};
use crate::Route;

#[component]
pub fn Login() -> Element {
    let state = use_app_state();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error_message = use_signal(|| None::<&'static str>);

    // Already signed in, nothing to do here.
    use_effect(move || {
        if (state.user)().is_some() {
            navigator.replace(Route::DiaryList {});
        }
    });

    let on_log_in = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        error_message.set(None);
        spawn(async move {
            let api = (state.api)();
            match api.log_in(email().trim(), &password()).await {
                Ok(()) => {
                    state.refresh_user().await;
                    navigator.push(Route::DiaryList {});
                }
                Err(error) => {
                    tracing::warn!("Login failed: {error}");
                    error_message.set(Some("Login failed."));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        section { class: "form-page",
            h1 { "Log in" }
            Input {
                r#type: "email",
                placeholder: "Email",
                value: "{email}",
                disabled: busy(),
                oninput: move |event: FormEvent| email.set(event.value()),
            }
            Input {
                r#type: "password",
                placeholder: "Password",
                value: "{password}",
                disabled: busy(),
                oninput: move |event: FormEvent| password.set(event.value()),
            }
            Button {
                variant: ButtonVariant::Primary,
                block: true,
                disabled: busy(),
                onclick: on_log_in,
                "Log in"
            }
            if let Some(message) = error_message() {
                p { class: "form-error", "{message}" }
            }
            p { class: "form-hint",
                "No account yet? "
                Link { to: Route::Signup {}, "Sign up" }
            }
        }
    }
}
