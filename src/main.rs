#![allow(warnings)]
//! Meal Explorer Frontend Entry Point

mod models;
mod config;
mod query;
mod api;
mod render;
mod components;
mod pages;
mod app;
#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = AppConfig::from_document();
    log::info!("[App] {:?} page, API at {}", config.role, config.api_base);
    mount_to_body(move || view! { <App config=config /> });
}
