// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for oracle-icons component tests.
//
// Provides mount/cleanup helpers and `window.__APP_CONFIG` injection so that
// individual test files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsValue;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Attribute value of the first element matching `selector` under `mount`.
pub fn attr(mount: &web_sys::Element, selector: &str, name: &str) -> Option<String> {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .get_attribute(name)
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a frozen `window.__APP_CONFIG` with the given gallery sizes and
/// fills.
pub fn inject_gallery_config(sizes: &[f64], fills: &[&str]) {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    let js_sizes: js_sys::Array = sizes.iter().map(|s| JsValue::from(*s)).collect();
    let js_fills: js_sys::Array = fills.iter().map(|f| JsValue::from(*f)).collect();
    set("gallerySizes", &js_sizes);
    set("galleryFills", &js_fills);
    set("background", &"black".into());

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Inject a `window.__APP_CONFIG` whose `gallerySizes` has the wrong type.
pub fn inject_malformed_config() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"gallerySizes".into(), &"large".into()).unwrap();
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &config).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
