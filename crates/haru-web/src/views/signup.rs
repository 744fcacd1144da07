//! Signup page

use dioxus::prelude::*;

use haru_core::models::SignupRequest;

use crate::state::use_app_state;
use crate::ui::{Button, ButtonVariant, Input};
use crate::Route;

#[component]
pub fn Signup() -> Element {
    let state = use_app_state();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error_message = use_signal(|| None::<&'static str>);

    let on_sign_up = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        error_message.set(None);
        spawn(async move {
            let api = (state.api)();
            let signup = SignupRequest {
                email: email().trim().to_string(),
                password: password(),
                name: name().trim().to_string(),
            };
            match api.sign_up(&signup).await {
                Ok(user) => {
                    tracing::info!(email = %user.email, "account created");
                    navigator.push(Route::Login {});
                }
                Err(error) => {
                    tracing::warn!("Signup failed: {error}");
                    error_message.set(Some("Sign up failed."));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        section { class: "form-page",
            h1 { "Sign up" }
            Input {
                r#type: "email",
                placeholder: "Email",
                value: "{email}",
                disabled: busy(),
                oninput: move |event: FormEvent| email.set(event.value()),
            }
            Input {
                placeholder: "Name",
                value: "{name}",
                disabled: busy(),
                oninput: move |event: FormEvent| name.set(event.value()),
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
                onclick: on_sign_up,
                "Create account"
            }
            if let Some(message) = error_message() {
                p { class: "form-error", "{message}" }
            }
            p { class: "form-hint",
                "Already registered? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
