use leptos::*;
use mount::mount_to_body;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // fails only if a logger is already installed
    let _ = console_log::init_with_level(level);

    log::info!("mounting app");
    mount_to_body(|| view! { <App/> });
}

pub mod app;
pub mod components;
pub mod content;
pub mod hooks;
pub mod nav;
pub mod pages;

pub use crate::app::App;
