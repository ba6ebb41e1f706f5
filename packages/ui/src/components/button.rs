use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button-primary",
            ButtonVariant::Outline => "button button-outline",
            ButtonVariant::Ghost => "button button-ghost",
            ButtonVariant::Danger => "button button-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] title: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = variant.class();
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            title: "{title}",
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
