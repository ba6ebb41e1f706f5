use dioxus::prelude::*;
use store::{Directory, EntityId, TableStore};
use ui::views::MessageListView;
use ui::AppStore;

#[component]
pub fn Messages(directory_id: String) -> Element {
    let selected = use_context::<Signal<Option<Directory>>>();
    let app_store = use_context::<AppStore>();
    let nav = use_navigator();
    let parent = EntityId::new(directory_id);

    let mut parent_signal = use_signal(|| parent.clone());
    if *parent_signal.peek() != parent {
        parent_signal.set(parent.clone());
    }

    // Deep links arrive without a selection; fall back to the stored name.
    let title = use_memo(move || {
        let parent = parent_signal();
        match selected() {
            Some(directory) if directory.id == parent => directory.name,
            _ => stored_name(&app_store, &parent).unwrap_or_else(|| "Messages".to_string()),
        }
    });

    rsx! {
        MessageListView {
            parent,
            title: title(),
            on_back: move |_| nav.go_back(),
        }
    }
}

fn stored_name(store: &AppStore, id: &EntityId) -> Option<String> {
    store
        .read(|tables| {
            tables
                .directories()
                .iter()
                .find(|d| &d.id == id)
                .map(|d| d.name.clone())
        })
        .ok()
        .flatten()
}
