// Browser-side tests for the DOM layer. Run with `wasm-pack test --headless`;
// under native `cargo test` this file compiles to nothing.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn backdrop_mounts_particles_and_tears_down() {
    nebula_pong::start_backdrop().expect("backdrop should mount");
    let doc = web_sys::window().unwrap().document().unwrap();
    let root = doc
        .get_element_by_id("np-backdrop")
        .expect("backdrop root mounted");
    assert_eq!(root.get_elements_by_class_name("particle").length(), 50);

    // Starting again while live must not duplicate anything.
    nebula_pong::start_backdrop().expect("restart is a no-op");
    assert_eq!(root.get_elements_by_class_name("particle").length(), 50);

    nebula_pong::stop_backdrop();
    assert!(doc.get_element_by_id("np-backdrop").is_none());

    // Stopping twice is harmless.
    nebula_pong::stop_backdrop();
}
