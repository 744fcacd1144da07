//! Diary list page - the home screen

use dioxus::prelude::*;

use haru_core::models::ListQuery;

use crate::components::DiaryCard;
use crate::state::use_app_state;
use crate::ui::{Button, ButtonVariant, Input};
use crate::Route;

#[component]
pub fn DiaryList() -> Element {
    let state = use_app_state();
    let page_size = state.page_size;
    let mut skip = use_signal(|| 0u32);
    let mut search = use_signal(String::new);

    // Re-runs whenever skip or the search text change.
    let mut diaries = use_resource(move || {
        let api = (state.api)();
        let term = search();
        let query = ListQuery {
            skip: skip(),
            limit: page_size,
            search: (!term.trim().is_empty()).then(|| term.trim().to_string()),
        };
        async move { api.list_diaries(&query).await }
    });

    let body = match &*diaries.read() {
        None => rsx! {
            p { class: "page-status", "Loading..." }
        },
        Some(Ok(list)) => rsx! {
            if list.is_empty() {
                p { class: "page-status",
                    if skip() == 0 { "No diary entries yet." } else { "No more entries." }
                }
            } else {
                div { class: "diary-list",
                    for diary in list.iter().cloned() {
                        DiaryCard { key: "{diary.id}", diary }
                    }
                }
            }
            nav { class: "pager",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: skip() == 0,
                    onclick: move |_| skip.set(skip().saturating_sub(page_size)),
                    "Previous"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: (list.len() as u32) < page_size,
                    onclick: move |_| skip.set(skip() + page_size),
                    "Next"
                }
            }
        },
        Some(Err(error)) if error.is_unauthorized() => rsx! {
            p { class: "page-status",
                "Login required. "
                Link { to: Route::Login {}, "Log in" }
            }
        },
        Some(Err(_)) => rsx! {
            p { class: "form-error", "Could not load diary entries." }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| diaries.restart(),
                "Retry"
            }
        },
    };

    rsx! {
        section { class: "list-page",
            header { class: "list-header",
                h1 { "My diary" }
                if state.is_signed_in() {
                    Link { class: "btn btn--primary", to: Route::DiaryCreate {}, "New diary" }
                }
            }
            Input {
                r#type: "search",
                placeholder: "Search entries...",
                value: "{search}",
                oninput: move |event: FormEvent| {
                    search.set(event.value());
                    skip.set(0);
                },
            }
            {body}
        }
    }
}
