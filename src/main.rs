#![allow(warnings)]
//! Kanban Board Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load_config();
    let config = loaded.clone().unwrap_or_default();

    let log_buffer = match rolling_logger::init(&config.log_level, config.log_capacity) {
        Ok(buffer) => Some(buffer),
        Err(e) => {
            web_sys::console::warn_1(&format!("[APP] logger disabled: {}", e).into());
            None
        }
    };
    if let Err(e) = loaded {
        tracing::warn!(error = %e, "[APP] falling back to default config");
    }
    tracing::info!(?config, "[APP] starting");

    mount_to_body(move || view! { <App config=config.clone() log_buffer=log_buffer.clone() /> });
}
