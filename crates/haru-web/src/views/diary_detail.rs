//! Diary detail page

use dioxus::prelude::*;

use haru_core::{DiaryId, Error};

use crate::components::relative_time;
use crate::state::use_app_state;
use crate::ui::{confirm, Button, ButtonVariant};
use crate::Route;

#[component]
pub fn DiaryDetail(id: i64) -> Element {
    let state = use_app_state();
    let navigator = use_navigator();
    let diary_id = DiaryId::from(id);
    let mut deleting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<&'static str>);

    let diary = use_resource(move || {
        let api = (state.api)();
        async move { api.get_diary(diary_id).await }
    });

    let on_delete = move |_| {
        if deleting() || !confirm("Delete this diary entry?") {
            return;
        }
        deleting.set(true);
        error_message.set(None);
        spawn(async move {
            let api = (state.api)();
            match api.delete_diary(diary_id).await {
                Ok(()) => {
                    navigator.push(Route::DiaryList {});
                }
                Err(error) => {
                    tracing::warn!(%diary_id, "Failed to delete diary: {error}");
                    error_message.set(Some("Delete failed."));
                }
            }
            deleting.set(false);
        });
    };

    let body = match &*diary.read() {
        None => rsx! {
            p { class: "page-status", "Loading..." }
        },
        Some(Ok(diary)) => rsx! {
            h1 { "{diary.title}" }
            p { class: "detail-meta",
                if let Some(mood) = diary.mood {
                    span { class: "mood-badge", "{mood.label()}" }
                }
                span { "Updated {relative_time(diary.updated_at)}" }
            }
            p { class: "detail-content", "{diary.content}" }
            div { class: "detail-actions",
                Link { class: "btn btn--outline", to: Route::DiaryEdit { id }, "Edit" }
                Button {
                    variant: ButtonVariant::Danger,
                    disabled: deleting(),
                    onclick: on_delete,
                    "Delete"
                }
            }
        },
        Some(Err(error)) if error.is_unauthorized() => rsx! {
            p { class: "page-status",
                "Login required. "
                Link { to: Route::Login {}, "Log in" }
            }
        },
        Some(Err(Error::NotFound(_))) => rsx! {
            p { class: "page-status", "This diary entry does not exist." }
        },
        Some(Err(_)) => rsx! {
            p { class: "form-error", "Could not load this diary entry." }
        },
    };

    rsx! {
        section { class: "detail-page",
            {body}
            if let Some(message) = error_message() {
                p { class: "form-error", "{message}" }
            }
        }
    }
}
