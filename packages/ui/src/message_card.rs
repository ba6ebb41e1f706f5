use chrono::Local;
use dioxus::prelude::*;
use store::{EntityId, Message};

use crate::components::{Button, ButtonVariant};

#[component]
pub fn MessageCard(
    message: Message,
    on_edit: EventHandler<Message>,
    on_delete: EventHandler<EntityId>,
) -> Element {
    let created = message
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string();
    let edit_target = message.clone();
    let delete_target = message.id.clone();

    rsx! {
        div {
            class: "message-card",
            p { class: "message-card-text", "{message.text}" }
            p { class: "message-card-date", "Created: {created}" }
            div {
                class: "message-card-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| on_delete.call(delete_target.clone()),
                    "Delete"
                }
            }
        }
    }
}
