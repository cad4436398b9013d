use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "hero",
            h1 { "Furniture from a working factory floor" }
            p { class: "hero-lead",
                "We design and build solid-wood furniture in our own workshop, \
                 in small batches, from timber we season ourselves."
            }
            Link { class: "btn-primary", to: Route::Products {}, "Browse the range" }
        }

        section { class: "home-strip",
            div { class: "home-strip-item",
                h2 { "Built to order" }
                p { "Every piece leaves the bench finished by the person who made it, \
                     usually within six weeks of the order." }
            }
            div { class: "home-strip-item",
                h2 { "Honest materials" }
                p { "Oak and ash from managed woodland, oiled rather than lacquered, \
                     with the grain left on show." }
            }
            div { class: "home-strip-item",
                h2 { "Repairable for life" }
                p { "Joints you can re-glue and surfaces you can re-oil at home. \
                     We keep drawings of every piece we have ever sold." }
            }
        }
    }
}
