use dioxus::prelude::*;
use store::{AppConfig, Directory, EntityId, TableStore};

use crate::activity_log_panel::ActivityLogToggle;
use crate::controller::{DialogKind, DialogState, DirectoryListController, ListController};
use crate::icons::{FaFolderOpen, FaPlus};
use crate::services::AppStore;
use crate::{use_notifier, ConfirmDialog, DirectoryCard, EntityFormDialog, Icon, SearchBar};

use super::tasks::{spawn_load, spawn_submit};

/// Searchable grid of every directory, with create, rename and delete dialogs.
///
/// Expects an [`AppStore`] and an [`AppConfig`] in context.
#[component]
pub fn DirectoryListView(on_open: EventHandler<Directory>) -> Element {
    let app_store = use_context::<AppStore>();
    let config = use_context::<AppConfig>();
    let notify = use_notifier();
    let layout = config.layout.clone();
    let mut controller = use_signal(move || DirectoryListController::new(config.layout));
    let directories = app_store.directories();

    use_effect({
        let directories = directories.clone();
        move || spawn_load(controller, directories.clone(), notify)
    });

    let state = controller.read();
    let items = state.filtered_items().to_vec();
    let query = state.search_query().to_string();
    let columns = state.columns();
    let dialog = state.dialog().clone();
    let submitting = state.is_submitting();
    drop(state);

    let dialog_view = match dialog {
        DialogState::Closed => rsx! {},
        DialogState::Creating { draft } => {
            let service = directories.clone();
            rsx! {
                EntityFormDialog {
                    title: "Create New Directory",
                    field_label: "Directory Name",
                    submit_label: "Create",
                    value: draft,
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
            let service = directories.clone();
            rsx! {
                EntityFormDialog {
                    title: "Edit Directory",
                    field_label: "Directory Name",
                    submit_label: "Save",
                    value: draft,
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
            let service = directories.clone();
            rsx! {
                ConfirmDialog {
                    title: "Delete Directory",
                    message: "Are you sure you want to delete this directory?",
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
            onresize: move |evt: Event<ResizeData>| {
                let Ok(size) = evt.get_border_box_size() else {
                    return;
                };
                if controller.peek().columns() != layout.columns_for(size.width) {
                    controller.write().set_viewport_width(size.width);
                }
            },
            header {
                class: "screen-header",
                h1 { class: "screen-title", "Directories" }
                ActivityLogToggle {}
            }
            SearchBar {
                value: query,
                placeholder: "Search directories",
                on_input: move |text: String| controller.write().set_search_query(text),
            }
            if items.is_empty() {
                div {
                    class: "empty-state",
                    Icon { icon: FaFolderOpen, width: 40, height: 40 }
                    p { "No directories found" }
                }
            } else {
                div {
                    class: "directory-grid",
                    style: "grid-template-columns: repeat({columns}, minmax(0, 1fr));",
                    for directory in items {
                        DirectoryCard {
                            key: "{directory.id}",
                            directory: directory.clone(),
                            on_open: move |d: Directory| on_open.call(d),
                            on_edit: move |d: Directory| {
                                controller.write().open_edit(&d);
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
                title: "New directory",
                onclick: move |_| {
                    controller.write().open_create();
                },
                Icon { icon: FaPlus, width: 20, height: 20 }
            }
            {dialog_view}
        }
    }
}
