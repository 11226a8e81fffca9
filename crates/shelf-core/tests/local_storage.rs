//! Browser tests for the localStorage preference backend.
//!
//! Run with `wasm-pack test --headless --firefox crates/shelf-core`.

#![cfg(target_arch = "wasm32")]

use shelf_core::{LocalStorage, PreferenceStore, Theme, local_storage};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const KEY: &str = "theme";

fn reset() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(KEY);
    }
}

#[wasm_bindgen_test]
fn absent_preference_defaults_to_dark() {
    reset();
    assert_eq!(Theme::load(&LocalStorage, KEY), Theme::Dark);
}

#[wasm_bindgen_test]
fn toggling_twice_restores_persisted_value() {
    reset();
    LocalStorage.set(KEY, "light").unwrap();
    let start = Theme::load(&LocalStorage, KEY);

    let once = start.toggled();
    once.save(&LocalStorage, KEY).unwrap();
    assert_eq!(LocalStorage.get(KEY).as_deref(), Some("dark"));

    let twice = once.toggled();
    twice.save(&LocalStorage, KEY).unwrap();
    assert_eq!(LocalStorage.get(KEY).as_deref(), Some("light"));
    assert_eq!(twice, start);
}
