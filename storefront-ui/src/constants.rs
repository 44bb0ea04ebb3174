// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration and page-level constants.
//!
//! The deployment serves a small `window.__APP_CONFIG` object alongside the
//! bundle; reading it at runtime keeps one build deployable against any
//! backend.

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use storefront_client::StoreApiClient;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Size of the most-recent-products batch requested on page load.
pub const RECENT_PRODUCTS_LIMIT: usize = 8;

/// Maximum number of products shown in the featured rail.
pub const FEATURED_PRODUCTS_LIMIT: usize = 8;

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "apiBaseUrl")]
    pub api_base_url: String,
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().expect("window");
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

pub fn store_api_client() -> Result<StoreApiClient, String> {
    let config = app_config()?;
    Ok(StoreApiClient::new(&config.api_base_url))
}
