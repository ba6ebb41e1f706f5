use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label, Textarea};

const FIELD_ID: &str = "entity-dialog-field";
const TITLE_ID: &str = "entity-dialog-title";

/// Backdrop plus card shared by both dialogs. Escape or a click outside the
/// card calls `on_cancel`.
#[component]
fn DialogFrame(title: String, on_cancel: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_cancel.call(()),
            onkeydown: move |evt: Event<KeyboardData>| {
                if evt.key() == Key::Escape {
                    evt.stop_propagation();
                    on_cancel.call(());
                }
            },
            div {
                class: "modal-card dialog",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "{TITLE_ID}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h2 { id: "{TITLE_ID}", class: "dialog-title", "{title}" }
                {children}
            }
        }
    }
}

/// Modal form with one text field, used for both create and edit.
///
/// The draft lives in the caller's controller; this only renders it and
/// forwards edits.
#[component]
pub fn EntityFormDialog(
    title: String,
    field_label: String,
    submit_label: String,
    value: String,
    #[props(default)] multiline: bool,
    #[props(default)] submitting: bool,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        DialogFrame {
            title,
            on_cancel,
            div {
                class: "dialog-field",
                Label { html_for: "{FIELD_ID}", "{field_label}" }
                if multiline {
                    Textarea {
                        id: "{FIELD_ID}",
                        value: value.clone(),
                        autofocus: true,
                        oninput: move |evt: FormEvent| on_input.call(evt.value()),
                    }
                } else {
                    Input {
                        id: "{FIELD_ID}",
                        value: value.clone(),
                        autofocus: true,
                        oninput: move |evt: FormEvent| on_input.call(evt.value()),
                    }
                }
            }
            div {
                class: "dialog-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: submitting,
                    onclick: move |_| on_submit.call(()),
                    if submitting { "Working..." } else { "{submit_label}" }
                }
            }
        }
    }
}

/// Yes/no prompt before a destructive action.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default)] submitting: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        DialogFrame {
            title,
            on_cancel,
            p { class: "dialog-message", "{message}" }
            div {
                class: "dialog-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    disabled: submitting,
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
