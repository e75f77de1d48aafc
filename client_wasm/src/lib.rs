//! WebGPU client for the portfolio desktop
//!
//! Hosts the desktop shell and the Pong game in the browser: wasm-bindgen
//! exports, document listeners, audio, and a wgpu renderer for the field.
//! Note: Canvas surfaces are only available when compiling for wasm32

#![cfg(target_arch = "wasm32")]

mod audio;
mod camera;
mod desktop;
mod error;
mod input;
mod listeners;
mod mesh;
mod pong;
mod renderer;

pub use desktop::DesktopClient;
pub use pong::{create_pong, PongClient};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Client loaded");
}
