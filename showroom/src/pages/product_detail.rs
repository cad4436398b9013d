use dioxus::prelude::*;

use crate::catalog;
use crate::Route;

#[component]
pub fn ProductDetail(id: u32) -> Element {
    match catalog::find(id) {
        Some(product) => rsx! {
            section { class: "page",
                p { class: "breadcrumb",
                    Link { to: Route::Products {}, "Products" }
                    " / {product.name}"
                }
                h1 { "{product.name}" }
                p { class: "product-tagline", "{product.tagline}" }
                p { class: "product-description", "{product.description}" }
                Link { class: "btn-primary", to: Route::Contact {}, "Ask about this piece" }
            }
        },
        None => rsx! {
            section { class: "page",
                h1 { "Product not found" }
                p { "There is no product with number {id} in the current range." }
                Link { to: Route::Products {}, "Back to the range" }
            }
        },
    }
}
