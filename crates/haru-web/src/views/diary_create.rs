//! Diary creation page

use dioxus::prelude::*;

use haru_core::models::{DiaryDraft, Mood};

use crate::state::use_app_state;
use crate::ui::{Button, ButtonVariant, Input, TextArea};
use crate::Route;

#[component]
pub fn DiaryCreate() -> Element {
    let state = use_app_state();
    let navigator = use_navigator();
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut mood = use_signal(|| None::<Mood>);
    let mut busy = use_signal(|| false);
    let mut error_message = use_signal(|| None::<&'static str>);

    let on_save = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        error_message.set(None);
        spawn(async move {
            let api = (state.api)();
            let draft = DiaryDraft {
                title: title(),
                content: content(),
                mood: mood(),
            };
            match api.create_diary(&draft).await {
                Ok(created) => {
                    tracing::debug!(id = %created.id, "diary created");
                    navigator.push(Route::DiaryList {});
                }
                Err(error) => {
                    tracing::warn!("Failed to create diary: {error}");
                    error_message.set(Some("Could not save the entry."));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        section { class: "form-page",
            h1 { "New diary entry" }
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
            Button {
                variant: ButtonVariant::Primary,
                block: true,
                disabled: busy(),
                onclick: on_save,
                "Save entry"
            }
            if let Some(message) = error_message() {
                p { class: "form-error", "{message}" }
            }
        }
    }
}

/// Dropdown for the optional mood field.
#[component]
pub(super) fn MoodPicker(
    selected: Option<Mood>,
    #[props(default)] disabled: bool,
    onpick: EventHandler<Option<Mood>>,
) -> Element {
    rsx! {
        select { class: "field-select",
            disabled,
            onchange: move |event: FormEvent| onpick.call(event.value().parse().ok()),
            option { value: "", selected: selected.is_none(), "No mood" }
            for mood in Mood::ALL {
                option {
                    value: "{mood.as_str()}",
                    selected: selected == Some(mood),
                    "{mood.label()}"
                }
            }
        }
    }
}
