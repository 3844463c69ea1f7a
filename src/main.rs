use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod catalog;
mod config;
mod quote;
mod pages {
    pub mod home;
    pub mod pricing;
    pub mod quote;
}

use pages::{home::Home, pricing::Pricing, quote::QuoteForm};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pricing")]
    Pricing,
    #[at("/quote")]
    Quote,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        }
        Route::Quote => {
            info!("Rendering Quote page");
            html! { <QuoteForm /> }
        }
    }
}

#[function_component(Nav)]
fn nav() -> Html {
    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"JetRite"}
                </Link<Route>>
                <div class="nav-right">
                    <Link<Route> to={Route::Pricing} classes="nav-link">
                        {"Pricing"}
                    </Link<Route>>
                    <Link<Route> to={Route::Quote} classes="nav-link">
                        {"Get a Quote"}
                    </Link<Route>>
                    <a href="tel:+17066993810" class="nav-phone">
                        {"(706) 699-3810"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
