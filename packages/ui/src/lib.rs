//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;
pub mod controller;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod services;
pub use services::{data_dir, load_config, make_store, AppStore};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub mod activity_log;
pub use activity_log::{log_activity, log_notice, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod entity_dialog;
pub use entity_dialog::{ConfirmDialog, EntityFormDialog};

mod notice;
pub use notice::use_notifier;

mod directory_card;
pub use directory_card::DirectoryCard;

mod message_card;
pub use message_card::MessageCard;

mod search_bar;
pub use search_bar::SearchBar;
