//! Checklist Editor Entry Point

mod app;
mod components;
mod config;
mod context;
mod logger;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::load();
    logger::init(logger::parse_level(&config.log_level));
    if let Some(err) = config_error {
        log::warn!(target: "config", "ignoring malformed checklist-config: {}", err);
    }

    mount_to_body(move || view! { <App config=config /> });
}
