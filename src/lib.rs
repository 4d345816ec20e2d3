//! Nebula Pong page crate.
//!
//! Owns the ambient space backdrop (floating particles, shooting stars and
//! static planet decorations) advanced once per animation frame, and mounts
//! the third-party Pong widget on top of it. The particle simulation itself
//! lives in [`backdrop::sim`] and runs without a browser, so the update rules
//! are testable under plain `cargo test`.

use wasm_bindgen::prelude::*;

pub mod backdrop;
pub mod widget;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Mount the animated backdrop, then the Pong widget on top of it.
#[wasm_bindgen]
pub fn start_page() -> Result<(), JsValue> {
    backdrop::start_backdrop()?;
    widget::mount_widget()
}

/// Start the ambient backdrop alone. Calling this while the backdrop is
/// already running is a no-op.
#[wasm_bindgen]
pub fn start_backdrop() -> Result<(), JsValue> {
    backdrop::start_backdrop()
}

/// Tear the backdrop down: cancels the pending frame callback and detaches
/// the backdrop element tree.
#[wasm_bindgen]
pub fn stop_backdrop() {
    backdrop::stop_backdrop()
}
