// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration tests for the storefront Home (landing) page.
//
// The injected runtime config points at an unreachable backend, so every
// load attempt exercises the failure path: the loading indicator must clear
// and the page must render entirely from its built-in copy, with empty
// product rails. Rather than asserting on every DOM node, we check a handful
// of landmarks that uniquely identify the page — the way a human would
// glance at the screen and say "yep, that's the home page."

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point, inject_app_config, remove_app_config, wait_for_text};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;
use yew_router::prelude::*;

use storefront_client::StoreApiClient;
use storefront_ui::pages::home::Home;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

// ---------------------------------------------------------------------------
// Wrapper components — provide the router context the page's links need,
// so we always render Home regardless of the test-runner's URL path.
// ---------------------------------------------------------------------------

#[function_component(HomeTestWrapper)]
fn home_test_wrapper() -> Html {
    html! {
        <BrowserRouter>
            <Home />
        </BrowserRouter>
    }
}

#[function_component(InjectedClientWrapper)]
fn injected_client_wrapper() -> Html {
    // Connection refused immediately; the page must fall back to defaults.
    let api = StoreApiClient::new("http://127.0.0.1:1");
    html! {
        <BrowserRouter>
            <Home api={Some(api)} />
        </BrowserRouter>
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn home_shows_loading_indicator_while_fetching() {
    inject_app_config();

    let mount = create_mount_point();
    yew::Renderer::<HomeTestWrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(
        mount.query_selector(".loading-container").unwrap().is_some(),
        "loading indicator missing while the join is pending"
    );

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn home_renders_defaults_when_api_is_unreachable() {
    inject_app_config();

    let mount = create_mount_point();
    yew::Renderer::<HomeTestWrapper>::with_root(mount.clone()).render();

    assert!(
        wait_for_text(&mount, "Timeless Elegance,").await,
        "hero default copy never appeared"
    );

    // Loading cleared; spinner gone.
    assert!(
        mount.query_selector(".loading-container").unwrap().is_none(),
        "loading indicator should clear after the join fails"
    );

    // Landmarks for every defaulted section.
    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Shop Now"), "hero button missing");
    assert!(text.contains("Premium Fabrics"), "feature strip missing");
    assert!(text.contains("Our Story"), "about tagline missing");
    assert!(text.contains("Silk Sarees"), "promo banner missing");
    assert!(text.contains("Handpicked for You"), "featured header missing");
    assert!(text.contains("Why Choose Us?"), "why-choose-us missing");
    assert!(
        text.contains("What Our Customers Say"),
        "testimonials header missing"
    );
    assert!(text.contains("Ayesha Rahman"), "default testimonial missing");
    assert!(text.contains("Shop Your Style Today"), "CTA missing");

    // Empty recent list: the rail section is absent entirely.
    assert!(
        mount.query_selector(".recent-products").unwrap().is_none(),
        "recent rail should not render for an empty list"
    );
    assert!(
        !text.contains("Latest Collection"),
        "recent rail header should not render for an empty list"
    );

    // The featured rail has no such guard: its grid renders, empty.
    assert!(
        mount.query_selector(".featured-products").unwrap().is_some(),
        "featured rail section missing"
    );

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn home_renders_defaults_without_config() {
    // No __APP_CONFIG injected — the missing-config error takes the same
    // swallowed-failure path as a network error.
    remove_app_config();

    let mount = create_mount_point();
    yew::Renderer::<HomeTestWrapper>::with_root(mount.clone()).render();

    assert!(
        wait_for_text(&mount, "Timeless Elegance,").await,
        "hero default copy never appeared without config"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn home_accepts_an_injected_client() {
    // No runtime config needed when the client is passed as a prop.
    remove_app_config();

    let mount = create_mount_point();
    yew::Renderer::<InjectedClientWrapper>::with_root(mount.clone()).render();

    assert!(
        wait_for_text(&mount, "Timeless Elegance,").await,
        "hero default copy never appeared with an injected client"
    );

    cleanup(&mount);
}
