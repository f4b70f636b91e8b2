//! OrçaAqui Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod home;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init(log::LevelFilter::Info) {
        web_sys::console::error_1(&e.into());
    }

    let config = config::load_config();
    log::set_max_level(config.level_filter());
    log::info!("Starting with {:?}", config);

    mount_to_body(move || view! { <App config=config /> });
}
