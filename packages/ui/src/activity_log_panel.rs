use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogLevel};
use crate::icons::FaClockRotateLeft;
use crate::Icon;

/// Bottom sheet listing recent notices, newest first.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    let state = log.read();
    if !state.visible {
        return rsx! {};
    }
    let entries = state.entries.clone();
    let errors = state.count(LogLevel::Error);
    drop(state);
    let empty = entries.is_empty();

    rsx! {
        section {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span {
                    "Activity"
                    if errors > 0 {
                        span { class: "activity-log-error-count", " ({errors} failed)" }
                    }
                }
                div {
                    class: "activity-log-header-actions",
                    button {
                        disabled: empty,
                        onclick: move |_| log.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            ul {
                class: "activity-log-entries",
                if empty {
                    li { class: "activity-log-empty", "Nothing yet" }
                }
                for entry in entries.into_iter().rev() {
                    li {
                        class: format!("activity-log-entry {}", entry.level.tag()),
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { class: "activity-log-level", {entry.level.tag()} }
                        span { "{entry.message}" }
                    }
                }
            }
        }
    }
}

/// Header button that shows or hides [`ActivityLogPanel`].
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let state = log.read();
    let count = state.entries.len();
    let failing = state.count(LogLevel::Error) > 0;
    drop(state);

    rsx! {
        button {
            class: if failing { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            title: "Activity log",
            onclick: move |_| {
                let visible = log.peek().visible;
                log.write().visible = !visible;
            },
            Icon { icon: FaClockRotateLeft, width: 16, height: 16 }
            if count > 0 {
                span { class: "activity-log-badge", "{count}" }
            }
        }
    }
}
