//! Diary edit page - pre-fills the form with the fetched entry

use dioxus::prelude::*;

use haru_core::models::{DiaryPatch, Mood};
use haru_core::DiaryId;

use crate::state::use_app_state;
use crate::ui::{Button, ButtonVariant, Input, TextArea};
use crate::views::diary_create::MoodPicker;
use crate::Route;

#[component]
pub fn DiaryEdit(id: i64) -> Element {
    let state = use_app_state();
    let navigator = use_navigator();
    let diary_id = DiaryId::from(id);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut mood = use_signal(|| None::<Mood>);
    let mut hydrated = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let mut error_message = use_signal(|| None::<&'static str>);

    // Fetch the entry once and pre-fill the form.
    use_effect(move || {
        if hydrated() {
            return;
        }
        hydrated.set(true);
        spawn(async move {
            let api = (state.api)();
            match api.get_diary(diary_id).await {
                Ok(diary) => {
                    title.set(diary.title);
                    content.set(diary.content);
                    mood.set(diary.mood);
                }
                Err(error) => {
                    tracing::warn!(%diary_id, "Failed to load diary for editing: {error}");
                    error_message.set(Some("Could not load this diary entry."));
                }
            }
        });
    });

    let on_save = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        error_message.set(None);
        spawn(async move {
            let api = (state.api)();
            let patch = DiaryPatch {
                title: Some(title()),
                content: Some(content()),
                mood: mood(),
            };
            match api.update_diary(diary_id, &patch).await {
                Ok(updated) => {
                    navigator.push(Route::DiaryDetail {
                        id: updated.id.value(),
                    });
                }
                Err(error) => {
                    tracing::warn!(%diary_id, "Failed to update diary: {error}");
                    error_message.set(Some("Could not save the changes."));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        section { class: "form-page",
            h1 { "Edit diary entry" }
            Input {
                placeholder: "Title",
                value: "{title}",
                disabled: busy(),
                oninput: move |event: FormEvent| title.set(event.value()),
            }
            TextArea {
                placeholder: "What happened today?",
                rows: "8",
                value: "{content}",
                disabled: busy(),
                oninput: move |event: FormEvent| content.set(event.value()),
            }
            MoodPicker {
                selected: mood(),
                disabled: busy(),
                onpick: move |picked| mood.set(picked),
            }
            div { class: "detail-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: busy(),
                    onclick: on_save,
                    "Save changes"
                }
                Link { class: "btn btn--ghost", to: Route::DiaryDetail { id }, "Cancel" }
            }
            if let Some(message) = error_message() {
                p { class: "form-error", "{message}" }
            }
        }
    }
}
