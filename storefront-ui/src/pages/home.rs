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

//! The storefront landing page.
//!
//! On mount the page issues four concurrent reads (featured products, new
//! arrivals, a batch of recent products, and the home-page content table)
//! and joins them all-or-nothing. A failed join is logged and swallowed:
//! the page always renders, falling back to built-in copy and empty rails.

use std::cell::Cell;
use std::rc::Rc;

use storefront_client::StoreApiClient;
use storefront_types::{HomeContentRow, Product, PromoBanner};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{
    ArrowRightIcon, CheckIcon, HeartIcon, PackageIcon, SparklesIcon, StarIcon, TruckIcon,
};
use crate::components::product_card::ProductCard;
use crate::constants::{store_api_client, RECENT_PRODUCTS_LIMIT};
use crate::content::{featured_for_display, HomeContent};
use crate::routing::Route;

pub enum HomeMsg {
    FetchData,
    FetchSuccess(Box<HomeData>),
    FetchError(String),
}

/// Everything the loader fetches in one page activation.
pub struct HomeData {
    pub featured: Vec<Product>,
    pub new_arrivals: Vec<Product>,
    pub recent: Vec<Product>,
    pub content_rows: Vec<HomeContentRow>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct HomeProps {
    /// Override the API client (tests inject one pointing at a fake host).
    /// When absent, the client is built from the runtime configuration.
    #[prop_or_default]
    pub api: Option<StoreApiClient>,
}

pub struct Home {
    featured_products: Vec<Product>,
    new_products: Vec<Product>,
    recent_products: Vec<Product>,
    content: HomeContent,
    loading: bool,
    /// Cleared in `destroy` so a late response never writes into a dead page.
    alive: Rc<Cell<bool>>,
}

impl Component for Home {
    type Message = HomeMsg;
    type Properties = HomeProps;

    fn create(ctx: &Context<Self>) -> Self {
        // Fetch once per page activation.
        ctx.link().send_message(HomeMsg::FetchData);

        Self {
            featured_products: Vec::new(),
            new_products: Vec::new(),
            recent_products: Vec::new(),
            content: HomeContent::default(),
            loading: true,
            alive: Rc::new(Cell::new(true)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            HomeMsg::FetchData => {
                self.loading = true;

                let link = ctx.link().clone();
                let alive = self.alive.clone();
                let api = ctx.props().api.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let client = match api {
                        Some(client) => Ok(client),
                        None => store_api_client(),
                    };
                    let result = match client {
                        Ok(client) => load_home_data(&client).await,
                        Err(e) => Err(e),
                    };
                    if !alive.get() {
                        return;
                    }
                    match result {
                        Ok(data) => link.send_message(HomeMsg::FetchSuccess(Box::new(data))),
                        Err(e) => link.send_message(HomeMsg::FetchError(e)),
                    }
                });

                true
            }
            HomeMsg::FetchSuccess(data) => {
                self.featured_products = data.featured;
                self.new_products = data.new_arrivals;
                self.recent_products = data.recent;
                self.content = HomeContent::from_rows(&data.content_rows);
                self.loading = false;
                log::debug!(
                    "home data loaded: {} featured / {} new arrivals / {} recent",
                    self.featured_products.len(),
                    self.new_products.len(),
                    self.recent_products.len()
                );
                true
            }
            HomeMsg::FetchError(error) => {
                // Never fatal: the page renders from built-in copy instead.
                log::error!("Failed to load home page data: {error}");
                self.loading = false;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! {
                <div class="loading-container min-h-screen flex items-center justify-center bg-background">
                    <span class="loading-spinner"></span>
                </div>
            };
        }

        html! {
            <div class="home-page min-h-screen bg-background">
                { self.render_hero() }
                { self.render_feature_strip() }
                { self.render_recent_rail() }
                { self.render_about() }
                { self.render_promo_banners() }
                { self.render_featured_rail() }
                { self.render_why_choose_us() }
                { self.render_testimonials() }
                { self.render_cta() }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.alive.set(false);
    }
}

impl Home {
    fn render_hero(&self) -> Html {
        let hero = self.content.hero();

        html! {
            <section class="hero-section relative min-h-[85vh] flex items-center overflow-hidden bg-background">
                <div class="container-custom relative z-10">
                    <div class="grid lg:grid-cols-2 gap-12 items-center">
                        <div class="relative order-2 lg:order-1 fade-in-left">
                            <div class="relative">
                                <img
                                    src="https://images.unsplash.com/photo-1610030469983-98e550d6193c?w=600&h=800&fit=crop"
                                    alt="Premium Fashion Collection"
                                    class="w-full max-w-lg mx-auto rounded-2xl shadow-2xl object-cover"
                                />
                                <div class="hero-badge absolute -bottom-4 -left-4 bg-card rounded-2xl p-4 shadow-xl border border-border">
                                    <div class="flex items-center gap-3">
                                        <div class="w-12 h-12 rounded-full bg-accent/10 flex items-center justify-center">
                                            <SparklesIcon class={classes!("h-6", "w-6", "text-accent")} />
                                        </div>
                                        <div>
                                            <p class="text-sm font-medium text-foreground">{&hero.badge_title}</p>
                                            <p class="text-xs text-muted-foreground">{&hero.badge_subtitle}</p>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="order-1 lg:order-2 text-center lg:text-left fade-in-right">
                            <h1 class="text-4xl md:text-5xl lg:text-6xl font-display font-bold leading-tight mb-6">
                                <span class="text-foreground">{&hero.title}</span>
                                <br />
                                <span class="text-accent">{&hero.subtitle}</span>
                            </h1>
                            <p class="text-lg text-muted-foreground mb-8 max-w-xl">
                                {&hero.description}
                            </p>
                            <Link<Route> to={Route::Products} classes={classes!("btn-primary", "text-base", "px-8")}>
                                {&hero.button_text}
                                <ArrowRightIcon class={classes!("h-5", "w-5", "ml-2")} />
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </section>
        }
    }

    fn render_feature_strip(&self) -> Html {
        let features = self.content.feature_items();

        html! {
            <section class="feature-strip py-8 bg-card border-y border-border">
                <div class="container-custom">
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                        { for features.iter().enumerate().map(|(index, feature)| html! {
                            <div
                                key={feature.title.clone()}
                                class="flex items-start gap-4 fade-in-up"
                                style={format!("animation-delay: {}ms", index * 100)}
                            >
                                <div class="flex-shrink-0 w-12 h-12 rounded-full bg-accent/10 flex items-center justify-center">
                                    <CheckIcon class={classes!("h-6", "w-6", "text-accent")} />
                                </div>
                                <div>
                                    <h3 class="font-semibold text-foreground text-sm">{&feature.title}</h3>
                                    <p class="text-xs text-muted-foreground mt-1">{&feature.description}</p>
                                </div>
                            </div>
                        })}
                    </div>
                </div>
            </section>
        }
    }

    fn render_recent_rail(&self) -> Html {
        if self.recent_products.is_empty() {
            return html! {};
        }

        html! {
            <section class="recent-products py-16 md:py-24 bg-background">
                <div class="container-custom">
                    <div class="flex items-center justify-between mb-12">
                        <div>
                            <span class="text-accent font-medium text-sm uppercase tracking-wider">{"New Arrivals"}</span>
                            <h2 class="text-3xl md:text-4xl font-display font-bold text-foreground mt-2">
                                {"Latest Collection"}
                            </h2>
                        </div>
                        <Link<Route> to={Route::Products} classes={classes!("btn-outline")}>
                            {"View All"}
                            <ArrowRightIcon class={classes!("h-5", "w-5", "ml-2")} />
                        </Link<Route>>
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4 md:gap-6">
                        { for self.recent_products.iter().enumerate().map(|(index, product)| html! {
                            <ProductCard key={product.id.clone()} product={product.clone()} index={index} />
                        })}
                    </div>
                </div>
            </section>
        }
    }

    fn render_about(&self) -> Html {
        let about = self.content.about();

        html! {
            <section class="about-section py-16 md:py-24 bg-muted/30">
                <div class="container-custom">
                    <div class="grid lg:grid-cols-2 gap-12 items-center">
                        <div class="relative fade-in-left">
                            <img
                                src="https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=600&h=600&fit=crop"
                                alt="About Us"
                                class="rounded-2xl shadow-xl w-full max-w-md mx-auto"
                            />
                            <div class="absolute -bottom-6 -right-6 bg-foreground text-background rounded-2xl p-6 shadow-lg">
                                <p class="text-3xl font-bold">{&about.experience_years}</p>
                                <p class="text-sm opacity-80">{&about.experience_text}</p>
                            </div>
                        </div>

                        <div class="fade-in-right">
                            <span class="text-accent font-medium text-sm uppercase tracking-wider">{&about.tagline}</span>
                            <h2 class="text-3xl md:text-4xl font-display font-bold text-foreground mt-2 mb-6">
                                {&about.title}
                            </h2>

                            <div class="flex flex-wrap gap-4 mb-6">
                                <span class="inline-flex items-center gap-2 px-4 py-2 bg-accent/10 text-accent rounded-full text-sm font-medium">
                                    <CheckIcon class={classes!("h-4", "w-4")} /> {&about.badge1}
                                </span>
                                <span class="inline-flex items-center gap-2 px-4 py-2 bg-accent/10 text-accent rounded-full text-sm font-medium">
                                    <CheckIcon class={classes!("h-4", "w-4")} /> {&about.badge2}
                                </span>
                            </div>

                            <p class="text-muted-foreground mb-4">{&about.paragraph1}</p>
                            <p class="text-muted-foreground mb-6">{&about.paragraph2}</p>

                            <p class="text-sm font-medium text-foreground italic border-l-4 border-accent pl-4">
                                {&about.quote}
                            </p>

                            <Link<Route> to={Route::Products} classes={classes!("btn-outline", "mt-6")}>
                                {"Learn More"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </section>
        }
    }

    fn render_promo_banners(&self) -> Html {
        let banners = self.content.promo_banners();

        html! {
            <section class="promo-banners py-12 bg-background">
                <div class="container-custom">
                    <div class="grid md:grid-cols-2 gap-6">
                        { render_promo_banner(&banners.banner1) }
                        { render_promo_banner(&banners.banner2) }
                    </div>
                </div>
            </section>
        }
    }

    fn render_featured_rail(&self) -> Html {
        let header = self.content.featured_products();
        let products = featured_for_display(&self.featured_products);

        html! {
            <section class="featured-products py-16 md:py-24 bg-muted/30">
                <div class="container-custom">
                    <div class="flex items-center justify-between mb-12">
                        <div>
                            <span class="text-accent font-medium text-sm uppercase tracking-wider">{&header.tagline}</span>
                            <h2 class="text-3xl md:text-4xl font-display font-bold text-foreground mt-2">
                                {&header.title}
                            </h2>
                        </div>
                        <Link<Route> to={Route::Products} classes={classes!("btn-outline")}>
                            {&header.button_text}
                            <ArrowRightIcon class={classes!("h-5", "w-5", "ml-2")} />
                        </Link<Route>>
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4 md:gap-6">
                        { for products.iter().enumerate().map(|(index, product)| html! {
                            <ProductCard key={product.id.clone()} product={product.clone()} index={index} />
                        })}
                    </div>
                </div>
            </section>
        }
    }

    fn render_why_choose_us(&self) -> Html {
        let section = self.content.why_choose_us();

        html! {
            <section class="why-choose-us relative py-24 md:py-32 overflow-hidden bg-foreground">
                <div class="container-custom relative z-10">
                    <div class="max-w-3xl">
                        <span class="text-accent font-medium text-sm uppercase tracking-wider">{&section.tagline}</span>
                        <h2 class="text-3xl md:text-4xl font-display font-bold text-background mt-2 mb-8 leading-tight">
                            {&section.title}
                        </h2>

                        <div class="grid grid-cols-2 gap-4 max-w-lg">
                            { render_highlight(html! { <SparklesIcon class={classes!("h-7", "w-7", "text-accent")} /> }, "Premium Quality", 0) }
                            { render_highlight(html! { <PackageIcon class={classes!("h-7", "w-7", "text-accent")} /> }, "Handcrafted", 1) }
                            { render_highlight(html! { <HeartIcon class={classes!("h-7", "w-7", "text-accent")} /> }, "Elegant Designs", 2) }
                            { render_highlight(html! { <TruckIcon class={classes!("h-7", "w-7", "text-accent")} /> }, "Fast Delivery", 3) }
                        </div>
                    </div>
                </div>
            </section>
        }
    }

    fn render_testimonials(&self) -> Html {
        let header = self.content.testimonials();
        let testimonials = self.content.testimonial_items();

        html! {
            <section class="testimonials py-16 md:py-24 bg-background">
                <div class="container-custom">
                    <div class="text-center mb-12">
                        <span class="text-accent font-medium text-sm uppercase tracking-wider">{&header.tagline}</span>
                        <h2 class="text-3xl md:text-4xl font-display font-bold text-foreground mt-2">
                            {&header.title}
                        </h2>
                        <p class="text-muted-foreground mt-4 max-w-2xl mx-auto">
                            {"Hear from our happy customers about their experience shopping with us."}
                        </p>
                    </div>

                    <div class="grid md:grid-cols-3 gap-6">
                        { for testimonials.iter().enumerate().map(|(index, testimonial)| html! {
                            <div
                                key={testimonial.name.clone()}
                                class="bg-card p-6 rounded-2xl border border-border fade-in-up"
                                style={format!("animation-delay: {}ms", index * 100)}
                            >
                                <div class="flex gap-1 mb-4">
                                    { for (0..5).map(|_| html! {
                                        <StarIcon class={classes!("h-4", "w-4", "text-accent")} />
                                    })}
                                </div>
                                <p class="text-muted-foreground mb-4 italic">{format!("\"{}\"", testimonial.text)}</p>
                                <div>
                                    <p class="font-semibold text-foreground">{&testimonial.name}</p>
                                    <p class="text-sm text-muted-foreground">{&testimonial.location}</p>
                                </div>
                            </div>
                        })}
                    </div>
                </div>
            </section>
        }
    }

    fn render_cta(&self) -> Html {
        html! {
            <section class="cta-section py-16 md:py-24 bg-foreground">
                <div class="container-custom text-center">
                    <h2 class="text-3xl md:text-4xl font-display font-bold text-background mb-4">
                        {"Shop Your Style Today"}
                    </h2>
                    <p class="text-background/70 mb-8 max-w-md mx-auto">
                        {"Browse our latest collection of sarees, three-piece sets, and more. Free delivery nationwide."}
                    </p>
                    <Link<Route> to={Route::Products} classes={classes!("btn-accent")}>
                        {"Browse Collection"}
                        <ArrowRightIcon class={classes!("h-5", "w-5", "ml-2")} />
                    </Link<Route>>
                </div>
            </section>
        }
    }
}

fn render_promo_banner(banner: &PromoBanner) -> Html {
    html! {
        <div class="promo-banner relative rounded-2xl overflow-hidden group">
            <img
                src={banner.image.clone()}
                alt={banner.title.clone()}
                class="w-full h-64 md:h-80 object-cover transition-transform duration-500 group-hover:scale-105"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-foreground/70 to-transparent"></div>
            <div class="absolute inset-0 flex flex-col justify-end p-8">
                <span class="text-accent font-medium text-sm">{&banner.tagline}</span>
                <h3 class="text-2xl md:text-3xl font-display font-bold text-background mt-2 mb-4">
                    {&banner.title}<br />{&banner.subtitle}
                </h3>
                <div>
                    <Link<Route> to={Route::Products} classes={classes!("btn-secondary", "rounded-full")}>
                        {&banner.button_text}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}

fn render_highlight(icon: Html, title: &str, index: usize) -> Html {
    html! {
        <div
            key={title.to_string()}
            class="bg-background/10 backdrop-blur-sm p-6 rounded-xl text-center border border-background/20 fade-in-up"
            style={format!("animation-delay: {}ms", index * 100)}
        >
            <div class="w-14 h-14 mx-auto rounded-full bg-accent/20 flex items-center justify-center mb-3">
                { icon }
            </div>
            <h4 class="font-semibold text-background text-sm">{title}</h4>
        </div>
    }
}

async fn load_home_data(client: &StoreApiClient) -> Result<HomeData, String> {
    // All four reads settle together: one failure fails the whole join and
    // the page falls back to defaults for everything.
    let (featured, new_arrivals, recent, content_rows) = futures::try_join!(
        client.fetch_featured_products(),
        client.fetch_new_products(),
        client.fetch_recent_products(RECENT_PRODUCTS_LIMIT),
        client.list_home_content(),
    )
    .map_err(|e| format!("{e}"))?;

    Ok(HomeData {
        featured,
        new_arrivals,
        recent,
        content_rows,
    })
}
