use dioxus::prelude::*;

/// Single-line text field.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] autofocus: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "text",
            placeholder: "{placeholder}",
            value: "{value}",
            autofocus,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Multi-line text field; newlines are kept as typed.
#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default = 4)] rows: u32,
    #[props(default)] autofocus: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "input textarea {class}",
            placeholder: "{placeholder}",
            rows: "{rows}",
            value: "{value}",
            autofocus,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
