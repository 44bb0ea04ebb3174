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

//! Editable home-page content.
//!
//! The backend stores one row per page section, keyed by `section_key`, with
//! a section-specific JSON payload in `content`. Payload field names are
//! camelCase on the wire (the content editor writes them that way); rows
//! themselves use snake_case column names.
//!
//! A missing section key is the normal "use the built-in copy" case, not an
//! error.

use serde::{Deserialize, Serialize};

/// One row of the home-page content table.
///
/// `content` is left as raw JSON here; it is validated against the matching
/// section record when the page folds rows into its content map.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HomeContentRow {
    pub section_key: String,
    pub content: serde_json::Value,
}

/// Payload for the `hero` section key.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub button_text: String,
    pub badge_title: String,
    pub badge_subtitle: String,
}

/// Payload for the `about` section key.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    pub tagline: String,
    pub title: String,
    pub badge1: String,
    pub badge2: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub quote: String,
    pub experience_years: String,
    pub experience_text: String,
}

/// Payload for the `promo_banners` section key: two banners, side by side.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromoBannersSection {
    pub banner1: PromoBanner,
    pub banner2: PromoBanner,
}

/// One promotional banner inside [`PromoBannersSection`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromoBanner {
    pub image: String,
    pub tagline: String,
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
}

/// Payload for the `featured_products` section key (rail header only; the
/// products themselves come from the catalog).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedProductsSection {
    pub tagline: String,
    pub title: String,
    pub button_text: String,
}

/// Payload for the `why_choose_us` section key.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WhyChooseUsSection {
    pub tagline: String,
    pub title: String,
}

/// Payload for the `testimonials` section key.
///
/// `items` may be omitted independently of the header fields; the page then
/// falls back to its built-in testimonial list while keeping the fetched
/// header.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsSection {
    pub tagline: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Testimonial>>,
}

/// One customer testimonial inside [`TestimonialsSection`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub name: String,
    pub location: String,
    pub text: String,
}

/// Payload for the `features` section key (the strip under the hero).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<FeatureItem>>,
}

/// One entry of the feature strip.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hero_section_parses_camel_case_payload() {
        let payload = json!({
            "title": "Timeless Elegance,",
            "subtitle": "Modern Style.",
            "description": "Curated ethnic wear.",
            "buttonText": "Shop Now",
            "badgeTitle": "New Arrivals",
            "badgeSubtitle": "Fresh collection just dropped",
        });
        let hero: HeroSection = serde_json::from_value(payload).unwrap();
        assert_eq!(hero.button_text, "Shop Now");
        assert_eq!(hero.badge_subtitle, "Fresh collection just dropped");
    }

    #[test]
    fn testimonials_items_are_optional() {
        let payload = json!({
            "tagline": "Testimonials",
            "title": "What Our Customers Say",
        });
        let section: TestimonialsSection = serde_json::from_value(payload).unwrap();
        assert!(section.items.is_none());
    }

    #[test]
    fn hero_section_missing_field_is_an_error() {
        let payload = json!({ "title": "Timeless Elegance," });
        assert!(serde_json::from_value::<HeroSection>(payload).is_err());
    }
}
