//! Room Manager Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod dialog;
mod form;
mod labels;
mod manager;
mod models;
mod rooms;
mod storage;

use app::App;
use config::Config;
use leptos::prelude::*;
use storage::LocalStorage;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = Config::load(&LocalStorage);
    let level = loaded
        .as_ref()
        .map_or(Config::default().log_level, |config| config.log_level);
    // Only fails if a logger is already installed
    let _ = console_logger::init(level);

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("ignoring configuration: {}", e);
        Config::default()
    });

    mount_to_body(move || view! { <App config=config /> });
}
