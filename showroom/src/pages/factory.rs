use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Factory() -> Element {
    rsx! {
        section { class: "page",
            h1 { "The factory" }
            p { class: "page-lead",
                "One long machine hall, four benches, and a timber loft. \
                 Nothing here is for show; this is where the range is built."
            }
            p {
                "The machine hall does the heavy work: a wide-belt sander, a \
                 panel saw, and a spindle moulder that predates everyone who \
                 uses it. Machines get parts square and to thickness, and \
                 nothing more. Fitting, shaping, and finishing happen at the \
                 benches, by hand."
            }
            p {
                "Upstairs, the loft holds about two years of sawn oak and ash \
                 in stick. Every board is numbered with its log, so a \
                 tabletop can be matched from boards that grew in the same \
                 tree."
            }
            p {
                "You are welcome to visit and see your piece on the bench. \
                 We show visitors around on Friday afternoons, by \
                 appointment."
            }
            Link { class: "btn-primary", to: Route::Contact {}, "Book a visit" }
        }
    }
}
