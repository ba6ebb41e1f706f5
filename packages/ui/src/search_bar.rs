use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

#[component]
pub fn SearchBar(value: String, placeholder: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "search-bar",
            Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
            input {
                class: "search-bar-input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}
