use dioxus::prelude::*;
use store::{EntityId, Message, TableStore};

use crate::activity_log_panel::ActivityLogToggle;
use crate::controller::{DialogKind, DialogState, ListController, MessageListController};
use crate::icons::{FaArrowLeft, FaInbox, FaPlus};
use crate::services::AppStore;
use crate::{use_notifier, ConfirmDialog, EntityFormDialog, Icon, MessageCard};

use super::tasks::{spawn_load, spawn_submit};

/// Messages of one directory, newest state from the store on every change.
#[component]
pub fn MessageListView(parent: EntityId, title: String, on_back: EventHandler<()>) -> Element {
    let mut parent_signal = use_signal(|| parent.clone());
    if *parent_signal.peek() != parent {
        parent_signal.set(parent.clone());
    }

    let app_store = use_context::<AppStore>();
    let notify = use_notifier();
    let mut controller = use_signal(|| MessageListController::new(parent.clone()));
    let messages = app_store.messages();

    use_effect({
        let messages = messages.clone();
        move || {
            let parent = parent_signal();
            controller.write().set_parent(parent);
            spawn_load(controller, messages.clone(), notify);
        }
    });

    let state = controller.read();
    let items = state.items().to_vec();
    let dialog = state.dialog().clone();
    let submitting = state.is_submitting();
    drop(state);

    let dialog_view = match dialog {
        DialogState::Closed => rsx! {},
        DialogState::Creating { draft } => {
            let service = messages.clone();
            rsx! {
                EntityFormDialog {
                    title: "Create New Message",
                    field_label: "Message Text",
                    submit_label: "Create",
                    value: draft,
                    multiline: true,
                    submitting,
                    on_input: move |text: String| controller.write().set_draft(text),
                    on_submit: move |_| {
                        spawn_submit(controller, service.clone(), DialogKind::Create, notify)
                    },
                    on_cancel: move |_| controller.write().cancel_kind(DialogKind::Create),
                }
            }
        }
        DialogState::Editing { draft, .. } => {
            let service = messages.clone();
            rsx! {
                EntityFormDialog {
                    title: "Edit Message",
                    field_label: "Message Text",
                    submit_label: "Save",
                    value: draft,
                    multiline: true,
                    submitting,
                    on_input: move |text: String| controller.write().set_draft(text),
                    on_submit: move |_| {
                        spawn_submit(controller, service.clone(), DialogKind::Edit, notify)
                    },
                    on_cancel: move |_| controller.write().cancel_kind(DialogKind::Edit),
                }
            }
        }
        DialogState::ConfirmingDelete { .. } => {
            let service = messages.clone();
            rsx! {
                ConfirmDialog {
                    title: "Delete Message",
                    message: "Are you sure you want to delete this message?",
                    submitting,
                    on_confirm: move |_| {
                        spawn_submit(controller, service.clone(), DialogKind::Delete, notify)
                    },
                    on_cancel: move |_| controller.write().cancel_kind(DialogKind::Delete),
                }
            }
        }
    };

    rsx! {
        div {
            class: "screen",
            header {
                class: "screen-header",
                button {
                    class: "icon-button",
                    title: "Back",
                    onclick: move |_| on_back.call(()),
                    Icon { icon: FaArrowLeft, width: 16, height: 16 }
                }
                h1 { class: "screen-title", title: "{title}", "{title}" }
                ActivityLogToggle {}
            }
            if items.is_empty() {
                div {
                    class: "empty-state",
                    Icon { icon: FaInbox, width: 40, height: 40 }
                    p { "No messages yet" }
                }
            } else {
                div {
                    class: "message-list",
                    for message in items {
                        MessageCard {
                            key: "{message.id}",
                            message: message.clone(),
                            on_edit: move |m: Message| {
                                controller.write().open_edit(&m);
                            },
                            on_delete: move |id: EntityId| {
                                controller.write().request_delete(id);
                            },
                        }
                    }
                }
            }
            button {
                class: "fab",
                title: "New message",
                onclick: move |_| {
                    controller.write().open_create();
                },
                Icon { icon: FaPlus, width: 20, height: 20 }
            }
            {dialog_view}
        }
    }
}
