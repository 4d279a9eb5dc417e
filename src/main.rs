//! GreenSpark Frontend Entry Point
//!
//! Progressive enhancement for the server-rendered campaign site.

mod api;
mod app;
mod components;
mod config;
mod controllers;
mod dom;
mod error;
mod exports;
mod models;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    app::start();
}
