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

//! Catalog read endpoints: featured, new, and most-recent products.

use storefront_types::Product;

use crate::error::ApiError;
use crate::{parse_api_response, StoreApiClient};

impl StoreApiClient {
    /// Products flagged as featured, in merchandising order.
    ///
    /// Calls `GET /api/v1/products/featured`.
    pub async fn fetch_featured_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.get("/api/v1/products/featured").send().await?;
        parse_api_response(response).await
    }

    /// Products flagged as new arrivals.
    ///
    /// Calls `GET /api/v1/products/new`.
    pub async fn fetch_new_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.get("/api/v1/products/new").send().await?;
        parse_api_response(response).await
    }

    /// The `count` most recently added products, newest first.
    ///
    /// Calls `GET /api/v1/products/recent?limit={count}`.
    pub async fn fetch_recent_products(&self, count: usize) -> Result<Vec<Product>, ApiError> {
        let response = self
            .get("/api/v1/products/recent")
            .query(&[("limit", count)])
            .send()
            .await?;
        parse_api_response(response).await
    }
}
