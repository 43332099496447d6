//! Ecoleta Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod error;
mod map;
mod models;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // A logger may already be installed on hot reload
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("[Main] logger not installed: {}", err).into());
    }

    mount_to_body(App);
}
