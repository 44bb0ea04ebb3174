/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Cross-platform REST client for the storefront catalog and content API.
//!
//! Works on WASM (browser), desktop, and mobile targets via [`reqwest`].
//! All endpoints are anonymous reads; there is no authenticated surface.
//!
//! # Example
//!
//! ```no_run
//! use storefront_client::StoreApiClient;
//!
//! # async fn example() -> Result<(), storefront_client::ApiError> {
//! let client = StoreApiClient::new("http://localhost:8081");
//! let featured = client.fetch_featured_products().await?;
//! println!("{} featured products", featured.len());
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod error;
pub mod products;

pub use error::ApiError;
pub use storefront_types;

use reqwest::Client;

/// A typed REST client for the storefront API.
///
/// All methods return strongly-typed payloads from [`storefront_types`] and
/// map HTTP errors to [`ApiError`].
#[derive(Debug, Clone)]
pub struct StoreApiClient {
    base_url: String,
    http: Client,
}

/// Equality is by target base URL; the underlying HTTP client carries no
/// identity of its own.
impl PartialEq for StoreApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl StoreApiClient {
    /// Create a new client pointing at the given storefront API base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"http://localhost:8081"`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// The base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a GET request for the given path.
    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        log::debug!("GET {}{}", self.base_url, path);
        self.http.get(self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Parse a standard `APIResponse<T>` body, returning `T` on success or
/// mapping the error to [`ApiError`].
pub(crate) async fn parse_api_response<T: serde::de::DeserializeOwned + serde::Serialize>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    match status {
        200 | 201 => {
            let wrapper: storefront_types::APIResponse<T> = response.json().await?;
            Ok(wrapper.result)
        }
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::NotFound(text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::ServerError { status, body: text })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = StoreApiClient::new("http://localhost:8081/");
        assert_eq!(client.base_url(), "http://localhost:8081");
    }

    #[test]
    fn clients_with_same_target_are_equal() {
        let a = StoreApiClient::new("http://shop:8081");
        let b = StoreApiClient::new("http://shop:8081/");
        assert_eq!(a, b);
    }
}
