use chrono::Local;
use dioxus::prelude::*;
use store::{Directory, EntityId};

use crate::icons::{FaFolder, FaPen, FaTrashCan};
use crate::Icon;

/// One tile of the directory grid. Clicking the tile opens the directory;
/// the action buttons do not.
#[component]
pub fn DirectoryCard(
    directory: Directory,
    on_open: EventHandler<Directory>,
    on_edit: EventHandler<Directory>,
    on_delete: EventHandler<EntityId>,
) -> Element {
    let created = directory
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d")
        .to_string();
    let open_target = directory.clone();
    let edit_target = directory.clone();
    let delete_target = directory.id.clone();

    rsx! {
        div {
            class: "directory-card",
            onclick: move |_| on_open.call(open_target.clone()),
            div {
                class: "directory-card-icon",
                Icon { icon: FaFolder, width: 22, height: 22 }
            }
            h3 { class: "directory-card-name", title: "{directory.name}", "{directory.name}" }
            p { class: "directory-card-date", "{created}" }
            div {
                class: "directory-card-actions",
                button {
                    class: "icon-button",
                    title: "Edit",
                    onclick: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        on_edit.call(edit_target.clone());
                    },
                    Icon { icon: FaPen, width: 12, height: 12 }
                }
                button {
                    class: "icon-button danger",
                    title: "Delete",
                    onclick: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        on_delete.call(delete_target.clone());
                    },
                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                }
            }
        }
    }
}
