//! Form primitives and toasts shared by the dialogs and screens.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Textarea};

pub use dioxus_primitives::label::Label;
pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};
