//! Noteapp Frontend Entry Point

use leptos::prelude::*;
use noteapp_ui::config::AppConfig;
use noteapp_ui::{logging, App};

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::load();
    logging::init(config.log_level);
    tracing::info!(api_base = %config.api_base, "starting noteapp");
    mount_to_body(move || view! { <App config=config /> });
}
