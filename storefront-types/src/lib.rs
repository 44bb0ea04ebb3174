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

//! Shared API types for the storefront backend.
//!
//! These are plain serde value records: the catalog [`Product`], the rows of
//! the editable home-page content table, and the response envelope every
//! endpoint wraps its payload in.

pub mod content;
pub mod product;
pub mod responses;

pub use content::{
    AboutSection, FeatureItem, FeaturedProductsSection, FeaturesSection, HeroSection,
    HomeContentRow, PromoBanner, PromoBannersSection, Testimonial, TestimonialsSection,
    WhyChooseUsSection,
};
pub use product::Product;
pub use responses::APIResponse;
