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

//! Product display card used by the home page rails.

use storefront_types::Product;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::Route;

#[derive(Properties, Clone, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    /// Position in the rail. Drives the entry-animation delay only; it has
    /// no effect on the data shown.
    #[prop_or_default]
    pub index: usize,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;
    let delay = format!("animation-delay: {}ms", props.index * 100);

    html! {
        <Link<Route> to={Route::Products} classes={classes!("product-card", "group")}>
            <article class="bg-card rounded-2xl overflow-hidden border border-border fade-in-up" style={delay}>
                <div class="relative aspect-[3/4] overflow-hidden">
                    {
                        if let Some(url) = &product.image_url {
                            html! {
                                <img
                                    src={url.clone()}
                                    alt={product.name.clone()}
                                    loading="lazy"
                                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                                />
                            }
                        } else {
                            html! { <div class="w-full h-full bg-muted"></div> }
                        }
                    }
                    {
                        if product.is_new {
                            html! {
                                <span class="absolute top-3 left-3 px-3 py-1 bg-accent text-accent-foreground rounded-full text-xs font-medium">
                                    {"New"}
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="p-4">
                    {
                        if let Some(category) = &product.category {
                            html! {
                                <p class="text-xs text-muted-foreground uppercase tracking-wider">{category}</p>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <h3 class="font-medium text-foreground mt-1 line-clamp-1">{&product.name}</h3>
                    <p class="text-accent font-semibold mt-2">{format_price(product.price)}</p>
                </div>
            </article>
        </Link<Route>>
    }
}

/// Format a price in Taka (e.g. "৳2500").
fn format_price(price: f64) -> String {
    format!("৳{price:.0}")
}

#[cfg(test)]
mod tests {
    use super::format_price;

    #[test]
    fn prices_render_as_whole_taka() {
        assert_eq!(format_price(2500.0), "৳2500");
        assert_eq!(format_price(1299.6), "৳1300");
    }
}
