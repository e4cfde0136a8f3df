// src/main.rs
#![allow(async_fn_in_trait)] // single-threaded wasm; no Send bounds wanted

mod api;
mod board;
mod components;
mod config;
mod error;
mod host;
mod model;
mod render;
mod state;

use components::{App, AppProps};
use config::BoardConfig;

fn main() {
    let config = BoardConfig::load_from_dom();
    let level = config.as_ref().map(BoardConfig::level).unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));

    let config = config.unwrap_or_else(|e| {
        log::warn!("{e}; falling back to defaults");
        BoardConfig::default()
    });
    log::info!("activity board starting, api base {:?}", config.api_base);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
