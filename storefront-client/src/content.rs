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

//! Home-page content endpoint.

use storefront_types::HomeContentRow;

use crate::error::ApiError;
use crate::{parse_api_response, StoreApiClient};

impl StoreApiClient {
    /// All rows of the home-page content table, unfiltered, in storage order.
    ///
    /// Calls `GET /api/v1/content/home`.
    pub async fn list_home_content(&self) -> Result<Vec<HomeContentRow>, ApiError> {
        let response = self.get("/api/v1/content/home").send().await?;
        parse_api_response(response).await
    }
}
