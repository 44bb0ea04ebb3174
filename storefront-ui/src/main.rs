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

use yew::prelude::*;
use yew_router::prelude::*;

use storefront_ui::pages::home::Home;
use storefront_ui::routing::Route;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Products => html! {
            <main class="page-placeholder container-custom py-24">
                <h1 class="text-3xl font-display font-bold">{"All Products"}</h1>
                <p class="text-muted-foreground mt-2">{"The full catalog lives here."}</p>
            </main>
        },
        Route::NotFound => html! { <h1>{"404"}</h1> },
    }
}

#[function_component(AppRoot)]
fn app_root() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("failed to initialize logging");
    yew::Renderer::<AppRoot>::new().render();
}
