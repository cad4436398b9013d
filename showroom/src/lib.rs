//! Showroom — the public site for the workshop: informational pages, a
//! product catalog, and a contact form backed by the contact service. Routes
//! and views live here; the binary just launches the app.

use dioxus::prelude::*;

pub mod catalog;
pub mod components;
pub mod contact_client;
pub mod menu;
pub mod pages;

use components::layout::SiteChrome;
use pages::{About, Contact, Factory, Home, NotFound, ProductDetail, Products};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteChrome)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/products")]
    Products {},
    #[route("/product/:id")]
    ProductDetail { id: u32 },
    #[route("/factory")]
    Factory {},
    #[route("/contact")]
    Contact {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
