use dioxus::prelude::*;
use store::Directory;
use ui::views::DirectoryListView;

use crate::Route;

#[component]
pub fn Directories() -> Element {
    let mut selected = use_context::<Signal<Option<Directory>>>();
    let nav = use_navigator();

    rsx! {
        DirectoryListView {
            on_open: move |directory: Directory| {
                let directory_id = directory.id.to_string();
                selected.set(Some(directory));
                nav.push(Route::Messages { directory_id });
            },
        }
    }
}
