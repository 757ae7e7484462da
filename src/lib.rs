//! # whiteboard
//!
//! Browser entry point for the freehand whiteboard. Compiled to WebAssembly;
//! on load it finds the page's canvas, panels and buttons, restores the board
//! from `localStorage`, and hands every input event to the `canvas` engine.
//! Saved boards are mirrored into other open tabs through `storage` events.

pub mod app;
pub mod dom;
pub mod error;
pub mod panel;
pub mod storage;

use wasm_bindgen::prelude::*;

/// Install logging and the panic hook, then mount the app.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    app::mount()?;
    Ok(())
}
