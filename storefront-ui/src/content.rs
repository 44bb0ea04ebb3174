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

//! Resolved home-page content.
//!
//! The backend content table can override the copy of each page section; any
//! section it does not provide falls back to the literal defaults below.
//! Resolution is all-or-nothing per section: a fetched `hero` record replaces
//! the default `hero` record wholesale, never field by field. The two
//! list-valued fields (`testimonials.items`, `features.items`) are the only
//! partial-presence case and fall back independently of their section header.

use serde::de::DeserializeOwned;
use storefront_types::{
    AboutSection, FeatureItem, FeaturedProductsSection, FeaturesSection, HeroSection,
    HomeContentRow, Product, PromoBanner, PromoBannersSection, Testimonial, TestimonialsSection,
    WhyChooseUsSection,
};

use crate::constants::FEATURED_PRODUCTS_LIMIT;

/// Section overrides fetched from the content table, keyed by section key.
///
/// Absent keys are the normal case; `Default` is the empty map (everything
/// resolves to built-in copy).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeContent {
    hero: Option<HeroSection>,
    about: Option<AboutSection>,
    promo_banners: Option<PromoBannersSection>,
    featured_products: Option<FeaturedProductsSection>,
    why_choose_us: Option<WhyChooseUsSection>,
    testimonials: Option<TestimonialsSection>,
    features: Option<FeaturesSection>,
}

impl HomeContent {
    /// Fold fetched content rows into the section map.
    ///
    /// Duplicate section keys overwrite in row order (last write wins).
    /// Unknown keys are ignored. A payload that does not match its section's
    /// shape is logged and dropped so the section resolves to its default
    /// instead of rendering broken text.
    pub fn from_rows(rows: &[HomeContentRow]) -> Self {
        let mut content = Self::default();
        for row in rows {
            match row.section_key.as_str() {
                "hero" => content.hero = parse_section(row),
                "about" => content.about = parse_section(row),
                "promo_banners" => content.promo_banners = parse_section(row),
                "featured_products" => content.featured_products = parse_section(row),
                "why_choose_us" => content.why_choose_us = parse_section(row),
                "testimonials" => content.testimonials = parse_section(row),
                "features" => content.features = parse_section(row),
                other => log::debug!("ignoring unknown home content section '{other}'"),
            }
        }
        content
    }

    pub fn hero(&self) -> HeroSection {
        self.hero.clone().unwrap_or_else(default_hero)
    }

    pub fn about(&self) -> AboutSection {
        self.about.clone().unwrap_or_else(default_about)
    }

    pub fn promo_banners(&self) -> PromoBannersSection {
        self.promo_banners.clone().unwrap_or_else(default_promo_banners)
    }

    pub fn featured_products(&self) -> FeaturedProductsSection {
        self.featured_products
            .clone()
            .unwrap_or_else(default_featured_products)
    }

    pub fn why_choose_us(&self) -> WhyChooseUsSection {
        self.why_choose_us.clone().unwrap_or_else(default_why_choose_us)
    }

    /// Testimonials header (tagline and title). The list itself resolves
    /// separately via [`HomeContent::testimonial_items`].
    pub fn testimonials(&self) -> TestimonialsSection {
        self.testimonials.clone().unwrap_or_else(default_testimonials)
    }

    /// The testimonial cards. Falls back to the built-in list when the
    /// section is absent or carries no `items`.
    pub fn testimonial_items(&self) -> Vec<Testimonial> {
        self.testimonials
            .as_ref()
            .and_then(|section| section.items.clone())
            .unwrap_or_else(default_testimonial_items)
    }

    /// The feature-strip entries. Falls back to the built-in list when the
    /// section is absent or carries no `items`.
    pub fn feature_items(&self) -> Vec<FeatureItem> {
        self.features
            .as_ref()
            .and_then(|section| section.items.clone())
            .unwrap_or_else(default_feature_items)
    }
}

/// The slice of `products` shown in the featured rail: the first
/// [`FEATURED_PRODUCTS_LIMIT`] items, in input order.
pub fn featured_for_display(products: &[Product]) -> &[Product] {
    &products[..products.len().min(FEATURED_PRODUCTS_LIMIT)]
}

fn parse_section<T: DeserializeOwned>(row: &HomeContentRow) -> Option<T> {
    match serde_json::from_value(row.content.clone()) {
        Ok(section) => Some(section),
        Err(e) => {
            log::warn!(
                "malformed '{}' content row, falling back to default: {e}",
                row.section_key
            );
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in copy
// ---------------------------------------------------------------------------

fn default_hero() -> HeroSection {
    HeroSection {
        title: "Timeless Elegance,".to_string(),
        subtitle: "Modern Style.".to_string(),
        description: "Discover our curated collection of premium sarees, three-piece sets, and ethnic wear — crafted for the modern woman.".to_string(),
        button_text: "Shop Now".to_string(),
        badge_title: "New Arrivals".to_string(),
        badge_subtitle: "Fresh collection just dropped".to_string(),
    }
}

fn default_about() -> AboutSection {
    AboutSection {
        tagline: "Our Story".to_string(),
        title: "About Us".to_string(),
        badge1: "Handpicked Fabrics".to_string(),
        badge2: "Nationwide Delivery".to_string(),
        paragraph1: "We believe fashion is more than clothing — it's an expression of identity and culture. Every piece in our collection is carefully curated to bring you the finest in ethnic wear.".to_string(),
        paragraph2: "From luxurious Banarasi silk sarees to comfortable everyday three-piece sets, we source directly from artisans to ensure authenticity and quality.".to_string(),
        quote: "Quality fabric, timeless design, and unmatched comfort — that's what we deliver.".to_string(),
        experience_years: "5+".to_string(),
        experience_text: "Years of Excellence".to_string(),
    }
}

fn default_promo_banners() -> PromoBannersSection {
    PromoBannersSection {
        banner1: PromoBanner {
            image: "https://images.unsplash.com/photo-1610030469983-98e550d6193c?w=800&h=600&fit=crop".to_string(),
            tagline: "New Collection".to_string(),
            title: "Silk Sarees".to_string(),
            subtitle: "Handwoven Luxury".to_string(),
            button_text: "Explore".to_string(),
        },
        banner2: PromoBanner {
            image: "https://images.unsplash.com/photo-1583391733956-6c78276477e2?w=800&h=600&fit=crop".to_string(),
            tagline: "Trending".to_string(),
            title: "Three Piece Sets".to_string(),
            subtitle: "Comfort Meets Style".to_string(),
            button_text: "Shop Now".to_string(),
        },
    }
}

fn default_featured_products() -> FeaturedProductsSection {
    FeaturedProductsSection {
        tagline: "Our Collection".to_string(),
        title: "Handpicked for You".to_string(),
        button_text: "View All".to_string(),
    }
}

fn default_why_choose_us() -> WhyChooseUsSection {
    WhyChooseUsSection {
        tagline: "Why Choose Us?".to_string(),
        title: "Trusted by thousands for quality, authenticity, and impeccable style.".to_string(),
    }
}

fn default_testimonials() -> TestimonialsSection {
    TestimonialsSection {
        tagline: "Testimonials".to_string(),
        title: "What Our Customers Say".to_string(),
        items: None,
    }
}

fn default_testimonial_items() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Ayesha Rahman".to_string(),
            location: "Dhaka".to_string(),
            text: "The Banarasi saree I ordered was absolutely stunning. The quality exceeded my expectations. Will definitely order again!".to_string(),
        },
        Testimonial {
            name: "Nusrat Jahan".to_string(),
            location: "Chittagong".to_string(),
            text: "Beautiful three-piece set with amazing embroidery. Packaging was excellent and delivery was quick. Highly recommended.".to_string(),
        },
        Testimonial {
            name: "Fatima Khatun".to_string(),
            location: "Sylhet".to_string(),
            text: "I've been shopping here for months now. Every piece is exactly as shown in the pictures. Great customer service too!".to_string(),
        },
    ]
}

fn default_feature_items() -> Vec<FeatureItem> {
    vec![
        FeatureItem {
            title: "Premium Fabrics".to_string(),
            description: "Every piece is crafted from the finest materials".to_string(),
        },
        FeatureItem {
            title: "Direct from Artisans".to_string(),
            description: "We source directly from skilled craftspeople".to_string(),
        },
        FeatureItem {
            title: "Secure Packaging".to_string(),
            description: "Your order arrives in pristine condition".to_string(),
        },
        FeatureItem {
            title: "Affordable Pricing".to_string(),
            description: "Luxury fashion at accessible prices".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hero_row() -> HomeContentRow {
        HomeContentRow {
            section_key: "hero".to_string(),
            content: json!({
                "title": "Eid Collection,",
                "subtitle": "Now Live.",
                "description": "Festival wear for the whole family.",
                "buttonText": "Browse",
                "badgeTitle": "Eid Special",
                "badgeSubtitle": "Limited stock",
            }),
        }
    }

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Saree {id}"),
            description: None,
            price: 2500.0,
            image_url: None,
            category: Some("sarees".to_string()),
            is_featured: true,
            is_new: false,
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn absent_sections_resolve_to_defaults() {
        let content = HomeContent::from_rows(&[]);
        assert_eq!(content.hero(), default_hero());
        assert_eq!(content.about(), default_about());
        assert_eq!(content.promo_banners(), default_promo_banners());
        assert_eq!(content.featured_products(), default_featured_products());
        assert_eq!(content.why_choose_us(), default_why_choose_us());
        assert_eq!(content.testimonials(), default_testimonials());
        assert_eq!(content.testimonial_items(), default_testimonial_items());
        assert_eq!(content.feature_items(), default_feature_items());
    }

    #[test]
    fn present_section_resolves_to_fetched_record_exactly() {
        let content = HomeContent::from_rows(&[hero_row()]);
        let hero = content.hero();
        assert_eq!(hero.title, "Eid Collection,");
        assert_eq!(hero.button_text, "Browse");
        // No field-level mixing with the default record.
        assert_ne!(hero.badge_subtitle, default_hero().badge_subtitle);
    }

    #[test]
    fn testimonials_items_fall_back_independently_of_the_header() {
        let row = HomeContentRow {
            section_key: "testimonials".to_string(),
            content: json!({
                "tagline": "Customer Love",
                "title": "Stories from our buyers",
            }),
        };
        let content = HomeContent::from_rows(&[row]);
        assert_eq!(content.testimonials().tagline, "Customer Love");

        let items = content.testimonial_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "Ayesha Rahman");
        assert_eq!(items[0].location, "Dhaka");
        assert_eq!(items[1].name, "Nusrat Jahan");
        assert_eq!(items[2].name, "Fatima Khatun");
    }

    #[test]
    fn fetched_testimonial_items_replace_the_default_list() {
        let row = HomeContentRow {
            section_key: "testimonials".to_string(),
            content: json!({
                "tagline": "Testimonials",
                "title": "What Our Customers Say",
                "items": [
                    { "name": "Rokeya Begum", "location": "Khulna", "text": "Lovely saree." }
                ],
            }),
        };
        let content = HomeContent::from_rows(&[row]);
        let items = content.testimonial_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Rokeya Begum");
    }

    #[test]
    fn malformed_section_payload_falls_back_to_default() {
        let row = HomeContentRow {
            section_key: "hero".to_string(),
            content: json!({ "title": "only a title" }),
        };
        let content = HomeContent::from_rows(&[row]);
        assert_eq!(content.hero(), default_hero());
    }

    #[test]
    fn duplicate_section_keys_last_write_wins() {
        let mut second = hero_row();
        second.content["title"] = json!("Second Write,");
        let content = HomeContent::from_rows(&[hero_row(), second]);
        assert_eq!(content.hero().title, "Second Write,");
    }

    #[test]
    fn unknown_section_keys_are_ignored() {
        let row = HomeContentRow {
            section_key: "footer".to_string(),
            content: json!({ "title": "whatever" }),
        };
        let content = HomeContent::from_rows(&[row]);
        assert_eq!(content, HomeContent::default());
    }

    #[test]
    fn resolution_is_idempotent() {
        let content = HomeContent::from_rows(&[hero_row()]);
        assert_eq!(content.hero(), content.hero());
        assert_eq!(content.testimonial_items(), content.testimonial_items());
    }

    #[test]
    fn featured_rail_caps_at_eight_in_input_order() {
        let products: Vec<Product> = (0..10).map(|i| product(&format!("p{i}"))).collect();
        let shown = featured_for_display(&products);
        assert_eq!(shown.len(), 8);
        assert_eq!(shown[0].id, "p0");
        assert_eq!(shown[7].id, "p7");
    }

    #[test]
    fn featured_rail_passes_short_lists_through() {
        let products = vec![product("a"), product("b")];
        assert_eq!(featured_for_display(&products).len(), 2);
        assert!(featured_for_display(&[]).is_empty());
    }
}
