// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for storefront-ui component tests.
//
// Provides mount/cleanup helpers and runtime-config injection so that
// individual test files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

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

/// Poll the mount-point until its text content contains `needle`, up to five
/// seconds. Returns `true` on a match, `false` on timeout.
pub async fn wait_for_text(mount: &web_sys::Element, needle: &str) -> bool {
    for _ in 0..50 {
        if mount.text_content().unwrap_or_default().contains(needle) {
            return true;
        }
        yew::platform::time::sleep(Duration::from_millis(100)).await;
    }
    false
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` object pointing at an unreachable backend.
/// Call this before rendering any component that reads the runtime config.
pub fn inject_app_config() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"apiBaseUrl".into(), &"http://test:8080".into()).unwrap();

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
