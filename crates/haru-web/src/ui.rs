//! Shared UI primitives for forms and actions.

use dioxus::prelude::*;

/// Button variant mapping.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn--primary",
            Self::Outline => "btn--outline",
            Self::Ghost => "btn--ghost",
            Self::Danger => "btn--danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] block: bool,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut class_name = format!("btn {}", variant.class());
    if block {
        class_name.push_str(" btn--block");
    }

    rsx! {
        button {
            class: "{class_name}",
            disabled,
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn Input(
    oninput: Option<EventHandler<FormEvent>>,
    onchange: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        input {
            class: "field-input",
            oninput: move |event| {
                if let Some(handler) = &oninput {
                    handler.call(event);
                }
            },
            onchange: move |event| {
                if let Some(handler) = &onchange {
                    handler.call(event);
                }
            },
            ..attributes,
        }
    }
}

#[component]
pub fn TextArea(
    oninput: Option<EventHandler<FormEvent>>,
    onchange: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        textarea {
            class: "field-textarea",
            oninput: move |event| {
                if let Some(handler) = &oninput {
                    handler.call(event);
                }
            },
            onchange: move |event| {
                if let Some(handler) = &onchange {
                    handler.call(event);
                }
            },
            ..attributes,
        }
    }
}

/// Ask the user to confirm a destructive action.
///
/// Uses the browser confirm dialog on wasm; non-wasm builds (tests) always
/// confirm.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .is_some_and(|window| window.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn variant_classes_are_distinct() {
        let classes = [
            ButtonVariant::Primary.class(),
            ButtonVariant::Outline.class(),
            ButtonVariant::Ghost.class(),
            ButtonVariant::Danger.class(),
        ];
        let mut deduped = classes.to_vec();
        deduped.dedup();
        assert_eq!(classes.len(), deduped.len());
    }
}
