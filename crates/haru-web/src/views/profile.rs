//! Profile page - account details, display name editing, account deletion

use dioxus::prelude::*;

use haru_core::models::ProfileUpdate;

use crate::state::use_app_state;
use crate::ui::{confirm, Button, ButtonVariant, Input};
use crate::Route;

#[component]
pub fn Profile() -> Element {
    let state = use_app_state();
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut hydrated = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let mut status_message = use_signal(|| None::<&'static str>);
    let mut error_message = use_signal(|| None::<&'static str>);

    // Copy the fetched display name into the edit field once.
    use_effect(move || {
        if hydrated() {
            return;
        }
        if let Some(user) = (state.user)() {
            hydrated.set(true);
            name.set(user.name);
        }
    });

    let on_save = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        status_message.set(None);
        error_message.set(None);
        spawn(async move {
            let mut state = state;
            let api = (state.api)();
            let update = ProfileUpdate {
                name: Some(name().trim().to_string()),
                ..ProfileUpdate::default()
            };
            match api.update_profile(&update).await {
                Ok(updated) => {
                    state.user.set(Some(updated));
                    status_message.set(Some("Profile updated."));
                }
                Err(error) => {
                    tracing::warn!("Failed to update profile: {error}");
                    error_message.set(Some("Could not update the profile."));
                }
            }
            busy.set(false);
        });
    };

    let on_delete_account = move |_| {
        if busy() || !confirm("Delete your account and all diary entries?") {
            return;
        }
        busy.set(true);
        error_message.set(None);
        spawn(async move {
            let mut state = state;
            let api = (state.api)();
            match api.delete_account().await {
                Ok(()) => {
                    state.user.set(None);
                    navigator.push(Route::Login {});
                }
                Err(error) => {
                    tracing::warn!("Failed to delete account: {error}");
                    error_message.set(Some("Could not delete the account."));
                }
            }
            busy.set(false);
        });
    };

    let user = (state.user)();
    let joined = user
        .as_ref()
        .map(|user| user.created_at.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    rsx! {
        section { class: "form-page",
            h1 { "My page" }
            if !(state.auth_checked)() {
                p { class: "page-status", "Loading..." }
            } else if let Some(user) = user {
                dl { class: "profile-fields",
                    dt { "Email" }
                    dd { "{user.email}" }
                    if let Some(phone) = user.phone_number.as_deref() {
                        dt { "Phone" }
                        dd { "{phone}" }
                    }
                    dt { "Joined" }
                    dd { "{joined}" }
                }
                label { class: "field-label", r#for: "profile-name", "Display name" }
                Input {
                    id: "profile-name",
                    value: "{name}",
                    disabled: busy(),
                    oninput: move |event: FormEvent| name.set(event.value()),
                }
                div { class: "detail-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: busy(),
                        onclick: on_save,
                        "Save"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: busy(),
                        onclick: on_delete_account,
                        "Delete account"
                    }
                }
                if let Some(message) = status_message() {
                    p { class: "form-status", "{message}" }
                }
                if let Some(message) = error_message() {
                    p { class: "form-error", "{message}" }
                }
            } else {
                p { class: "page-status",
                    "Login required. "
                    Link { to: Route::Login {}, "Log in" }
                }
            }
        }
    }
}
