use dioxus::prelude::*;
use store::{AppConfig, Directory};
use views::{Directories, Messages};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Directories {},
    #[route("/directories/:directory_id")]
    Messages { directory_id: String },
}

fn main() {
    let config = ui::load_config();
    init_tracing(&config);
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

fn init_tracing(config: &AppConfig) {
    let level = match config.logging.level.parse::<tracing::Level>() {
        Ok(level) => level,
        Err(_) => tracing::Level::INFO,
    };
    // A subscriber may already be installed by the launcher.
    tracing_subscriber::fmt().with_max_level(level).try_init().ok();
    tracing::info!(%level, "logging initialised");
}

#[component]
fn App() -> Element {
    let config = use_context::<AppConfig>();
    use_context_provider(|| ui::make_store(&config));
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));
    // Directory picked on the list screen, read back by the message screen
    use_context_provider(|| Signal::new(Option::<Directory>::None));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::components::ToastProvider {
            Router::<Route> {}
            ui::ActivityLogPanel {}
        }
    }
}
