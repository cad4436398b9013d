//! Shared page chrome: header with the collapsible navigation, footer, and
//! the outlet the router renders the current page into.

use dioxus::prelude::*;

use crate::menu;
use crate::Route;

#[component]
pub fn SiteChrome() -> Element {
    // The toggle is plain DOM wiring, attached once the header exists in the
    // document. The chrome stays mounted across route changes, so this runs
    // once for the lifetime of the page.
    use_effect(move || {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            menu::init(&document);
        }
    });

    rsx! {
        header { class: "site-header",
            Link { class: "brand", to: Route::Home {}, "Alder Works" }
            button {
                class: "mobile-menu-toggle",
                aria_label: "Toggle navigation",
                "☰"
            }
            nav { class: "main-nav",
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::About {}, "About" }
                Link { to: Route::Products {}, "Products" }
                Link { to: Route::Factory {}, "Factory" }
                Link { to: Route::Contact {}, "Contact" }
            }
        }

        main { class: "site-main",
            Outlet::<Route> {}
        }

        footer { class: "site-footer",
            p { "Alder Works. Solid furniture, built to order." }
            p { class: "footer-fine-print",
                "Workshop visits by appointment. Directions are on the factory page."
            }
        }
    }
}
