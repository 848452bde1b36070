//! Browser tests for the JS-value paths (run with `wasm-pack test --headless`).

#![cfg(target_arch = "wasm32")]

use thumbframe_wasm::JsTransformEditor;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn get(obj: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(obj, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn layout_serializes_geometry_and_handles() {
    let editor = JsTransformEditor::new();
    editor.image_loaded(400, 300);
    editor.begin_resize("se").unwrap();

    let layout = editor.layout().unwrap();
    let geometry = get(&layout, "geometry");
    assert_eq!(get(&geometry, "width").as_f64(), Some(400.0));
    assert_eq!(get(&layout, "gesture").as_string(), Some("corner".to_string()));
    assert_eq!(get(&layout, "active_handle").as_string(), Some("se".to_string()));
    assert_eq!(get(&layout, "pan_surface_interactive").as_bool(), Some(false));

    let handles = js_sys::Array::from(&get(&layout, "handles"));
    assert_eq!(handles.length(), 9);
}

#[wasm_bindgen_test]
fn unknown_handle_is_an_error() {
    let editor = JsTransformEditor::new();
    let err = editor.begin_resize("middle").unwrap_err();
    assert_eq!(err.as_string(), Some("Unknown handle: middle".to_string()));
    assert!(editor.begin_crop("nw").is_err());
}

#[wasm_bindgen_test]
fn config_object_is_applied() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"handle_size".into(), &JsValue::from_f64(20.0)).unwrap();
    js_sys::Reflect::set(&config, &"size_policy".into(), &"flip".into()).unwrap();

    let editor = JsTransformEditor::with_config(config.into()).unwrap();
    editor.image_loaded(100, 100);
    editor.begin_crop("e").unwrap();
    editor.pointer_move(-150.0, 0.0, 0.0, 0.0);
    editor.end_gesture();

    assert_eq!(editor.x(), -50.0);
    assert_eq!(editor.width(), 50.0);
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"handle_size".into(), &JsValue::from_f64(0.0)).unwrap();
    assert!(JsTransformEditor::with_config(config.into()).is_err());
}

#[wasm_bindgen_test]
fn handle_ids_in_paint_order() {
    let editor = JsTransformEditor::new();
    let ids: Vec<String> = editor
        .handle_ids()
        .iter()
        .filter_map(|v| v.as_string())
        .collect();
    assert_eq!(ids, ["nw", "n", "ne", "e", "se", "s", "sw", "w", "rotate"]);
}

#[wasm_bindgen_test]
fn window_pointerup_ends_gesture() {
    let mut editor = JsTransformEditor::new();
    editor.attach_window_release().unwrap();
    editor.image_loaded(400, 300);
    editor.begin_pan();
    assert_eq!(editor.mode(), "move");

    let window = web_sys::window().unwrap();
    let event = web_sys::Event::new("pointerup").unwrap();
    window.dispatch_event(&event).unwrap();
    assert_eq!(editor.mode(), "none");

    editor.detach_window_release();
    editor.begin_pan();
    window.dispatch_event(&event).unwrap();
    assert_eq!(editor.mode(), "move");
}
