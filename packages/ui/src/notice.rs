use dioxus::prelude::*;

use crate::activity_log::{log_notice, use_activity_log, LogLevel};
use crate::components::{use_toast, ToastOptions};
use crate::controller::Notice;

/// Callback that shows a [`Notice`] as a toast and records it in the
/// activity log.
///
/// Needs a `ToastProvider` and a `Signal<ActivityLog>` above the caller.
pub fn use_notifier() -> Callback<Notice> {
    let toasts = use_toast();
    let mut log = use_activity_log();
    use_callback(move |notice: Notice| {
        log_notice(&mut log, &notice);
        let options = ToastOptions::new();
        match notice.level {
            LogLevel::Success => toasts.success(notice.message, options),
            LogLevel::Warning => toasts.warning(notice.message, options),
            LogLevel::Error => toasts.error(notice.message, options),
            LogLevel::Info => toasts.info(notice.message, options),
        }
    })
}
