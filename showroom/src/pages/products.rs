use dioxus::prelude::*;

use crate::catalog;
use crate::Route;

#[component]
pub fn Products() -> Element {
    rsx! {
        section { class: "page",
            h1 { "Products" }
            p { class: "page-lead",
                "The current range. Prices on request; every piece is made to \
                 order."
            }
            div { class: "product-grid",
                for product in catalog::all() {
                    div { class: "product-card", key: "{product.id}",
                        h2 { "{product.name}" }
                        p { class: "product-tagline", "{product.tagline}" }
                        Link {
                            class: "product-link",
                            to: Route::ProductDetail { id: product.id },
                            "View details"
                        }
                    }
                }
            }
        }
    }
}
